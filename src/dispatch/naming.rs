//! The compressed-artifact naming convention.
//!
//! A compressed file records its kernel in its final extension:
//! `<stem>.easy_compressed_<kernel>`, with `<kernel>` a plain decimal in
//! `[1, KERNEL_COUNT]`. Decompression recovers the kernel from the name alone.

use std::path::{Path, PathBuf};

use crate::error::{EasyCompressError, Result};
use crate::types::KernelIndex;

/// The literal that precedes the kernel index in a compressed file name.
pub const COMPRESSED_MARKER: &str = ".easy_compressed_";

/// Builds the output path for `base_path` compressed with `kernel`.
///
/// The final extension of `base_path`, if any, is replaced:
/// `out.txt` with kernel 7 becomes `out.easy_compressed_7`.
///
/// # Errors
/// Returns `MalformedCompressedName` if `base_path` has no file name to carry
/// the marker (`""`, `/`, or a path ending in `..`).
pub fn name_for_compressed_output(base_path: impl AsRef<Path>, kernel: KernelIndex) -> Result<PathBuf> {
    let base_path = base_path.as_ref();
    if base_path.file_name().is_none() {
        return Err(EasyCompressError::MalformedCompressedName(
            base_path.display().to_string(),
        ));
    }
    let mut path = base_path.to_path_buf();
    path.set_extension(format!("{}{}", &COMPRESSED_MARKER[1..], kernel));
    Ok(path)
}

/// Recovers the kernel index from a compressed file name.
///
/// # Errors
/// Returns `MalformedCompressedName` if the marker is absent, the suffix is not
/// a plain decimal, or the index lies outside `[1, KERNEL_COUNT]`.
pub fn kernel_for_compressed_input(path: impl AsRef<Path>) -> Result<KernelIndex> {
    let path = path.as_ref();
    let malformed = || EasyCompressError::MalformedCompressedName(path.display().to_string());

    let extension = path.extension().and_then(|e| e.to_str()).ok_or_else(malformed)?;
    let suffix = extension
        .strip_prefix(&COMPRESSED_MARKER[1..])
        .ok_or_else(malformed)?;
    suffix.parse::<KernelIndex>().map_err(|_| malformed())
}
