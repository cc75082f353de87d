// In: src/dispatch/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Dispatcher
// ====================================================================================
//
// The dispatcher is the only place where bytes meet a codec. It never transforms
// bytes itself; it resolves *which* kernel to use, records that choice in the
// output file name, and forwards the bytes to the `CodecProvider`.
//
// Data Flow (Compression):
//
//   1. (content_type, alpha) --selector--> KernelIndex      (or a profile's frozen kernel)
//   2. name_for_compressed_output(base, kernel) -> "<stem>.easy_compressed_<k>"
//   3. provider.compress(kernel, bytes) -> written to the named output
//
// Data Flow (Decompression):
//
//   1. kernel_for_compressed_input("<stem>.easy_compressed_<k>") -> KernelIndex
//   2. provider.decompress(kernel, bytes) -> written to the requested output
//
// ====================================================================================

pub mod naming;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::MetricsCatalog;
use crate::error::{EasyCompressError, Result};
use crate::kernels::CodecProvider;
use crate::profile::ProfileStore;
use crate::selector;
use crate::types::{ContentType, KernelIndex};

pub use naming::{kernel_for_compressed_input, name_for_compressed_output, COMPRESSED_MARKER};

/// Where a compression wrote its output, and with which kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedArtifact {
    pub kernel: KernelIndex,
    pub path: PathBuf,
    pub original_size: usize,
    pub compressed_size: usize,
}

/// Routes bytes and files to the kernels of a `CodecProvider`.
#[derive(Debug, Clone)]
pub struct Dispatcher<P> {
    provider: P,
    catalog: Arc<MetricsCatalog>,
}

impl<P: CodecProvider> Dispatcher<P> {
    pub fn new(provider: P, catalog: Arc<MetricsCatalog>) -> Self {
        Self { provider, catalog }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn catalog(&self) -> &Arc<MetricsCatalog> {
        &self.catalog
    }

    //==============================================================================
    // In-memory API
    //==============================================================================

    /// Compresses `bytes` with `kernel`.
    pub fn compress(&self, kernel: KernelIndex, bytes: &[u8]) -> Result<Vec<u8>> {
        self.provider.compress(kernel, bytes)
    }

    /// Decompresses `bytes` that were produced by `kernel`.
    pub fn decompress(&self, kernel: KernelIndex, bytes: &[u8]) -> Result<Vec<u8>> {
        self.provider.decompress(kernel, bytes)
    }

    //==============================================================================
    // File API
    //==============================================================================

    /// Selects a kernel for `(content_type, alpha)` and compresses `input` with it.
    ///
    /// The output is written next to `output_base`, renamed to carry the kernel
    /// index (see `name_for_compressed_output`).
    pub fn compress_file(
        &self,
        input: impl AsRef<Path>,
        output_base: impl AsRef<Path>,
        content_type: ContentType,
        alpha: f64,
    ) -> Result<CompressedArtifact> {
        let input = input.as_ref();
        ensure_exists(input)?;
        let kernel = selector::select(&self.catalog, content_type, alpha)?;
        self.compress_file_with_kernel(input, output_base, kernel)
    }

    /// Compresses `input` with the kernel frozen in profile `profile_name`.
    ///
    /// The selector is not consulted.
    pub fn compress_file_with_profile(
        &self,
        input: impl AsRef<Path>,
        output_base: impl AsRef<Path>,
        profiles: &ProfileStore,
        profile_name: &str,
    ) -> Result<CompressedArtifact> {
        let input = input.as_ref();
        ensure_exists(input)?;
        let kernel = profiles.get_kernel(profile_name)?;
        self.compress_file_with_kernel(input, output_base, kernel)
    }

    /// Compresses `input` with an explicitly chosen kernel.
    pub fn compress_file_with_kernel(
        &self,
        input: impl AsRef<Path>,
        output_base: impl AsRef<Path>,
        kernel: KernelIndex,
    ) -> Result<CompressedArtifact> {
        let input = input.as_ref();
        ensure_exists(input)?;
        let path = name_for_compressed_output(output_base, kernel)?;

        let bytes = fs::read(input)?;
        let compressed = self.provider.compress(kernel, &bytes)?;
        fs::write(&path, &compressed)?;

        log::info!(
            "Compressed {} ({} bytes) with kernel {} into {} ({} bytes)",
            input.display(),
            bytes.len(),
            kernel,
            path.display(),
            compressed.len()
        );

        Ok(CompressedArtifact {
            kernel,
            path,
            original_size: bytes.len(),
            compressed_size: compressed.len(),
        })
    }

    /// Decompresses `input`, recovering the kernel from its file name.
    ///
    /// # Errors
    /// * `InputNotFound` if `input` does not exist.
    /// * `MalformedCompressedName` if the name carries no valid kernel marker.
    pub fn decompress_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<KernelIndex> {
        let input = input.as_ref();
        let output = output.as_ref();
        ensure_exists(input)?;
        let kernel = kernel_for_compressed_input(input)?;

        let bytes = fs::read(input)?;
        let restored = self.provider.decompress(kernel, &bytes)?;
        fs::write(output, &restored)?;

        log::info!(
            "Decompressed {} with kernel {} into {} ({} bytes)",
            input.display(),
            kernel,
            output.display(),
            restored.len()
        );
        Ok(kernel)
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(EasyCompressError::InputNotFound(path.to_path_buf()))
    }
}
