//! This module defines the seam between the selection engine and the byte-level
//! compression kernels.
//!
//! The engine only ever deals in `KernelIndex` values; the actual transforms live
//! behind the `CodecProvider` trait. Any implementation must expose exactly
//! `KERNEL_COUNT` kernels, be deterministic, and round-trip: for every kernel,
//! `decompress(k, compress(k, x)) == x`. The engine relies on this contract but
//! never checks it.

use crate::error::Result;
use crate::types::KernelIndex;

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Reference provider backed by Zstandard.
pub mod zstd;

pub use self::zstd::ZstdCodecProvider;

//==================================================================================
// 2. Provider Contract
//==================================================================================

/// A fixed bank of `KERNEL_COUNT` byte-level codecs, addressed by 1-based index.
pub trait CodecProvider {
    /// Compresses `input` with kernel `kernel`.
    fn compress(&self, kernel: KernelIndex, input: &[u8]) -> Result<Vec<u8>>;

    /// Reverses `compress` for the same kernel.
    fn decompress(&self, kernel: KernelIndex, input: &[u8]) -> Result<Vec<u8>>;
}

impl<P: CodecProvider + ?Sized> CodecProvider for &P {
    fn compress(&self, kernel: KernelIndex, input: &[u8]) -> Result<Vec<u8>> {
        (**self).compress(kernel, input)
    }

    fn decompress(&self, kernel: KernelIndex, input: &[u8]) -> Result<Vec<u8>> {
        (**self).decompress(kernel, input)
    }
}
