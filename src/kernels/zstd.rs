//! This module contains the reference `CodecProvider`, a panic-free wrapper
//! around the `zstd` crate.
//!
//! Each of the eleven kernels is a fixed Zstandard compression level, from the
//! fastest to the strongest. The levels do not reproduce the benchmark catalog;
//! they exist so the dispatcher can be exercised end to end without an external
//! codec library.

use std::io::Write;
use zstd::stream::Encoder;

use super::CodecProvider;
use crate::error::{EasyCompressError, Result};
use crate::types::{KernelIndex, KERNEL_COUNT};

/// Zstandard level used by each kernel, indexed by `KernelIndex::slot`.
const LEVELS: [i32; KERNEL_COUNT] = [1, 2, 3, 5, 7, 9, 12, 15, 17, 19, 22];

/// Size of the little-endian uncompressed-length header.
const HEADER_LEN: usize = 8;

/// Upper bound on the output buffer reserved up front from an untrusted header.
const MAX_PREALLOC: usize = 16 * 1024 * 1024;

//==================================================================================
// 1. Core Logic (The "Engine")
//==================================================================================

fn codec_err(kernel: KernelIndex, reason: impl ToString) -> EasyCompressError {
    EasyCompressError::CodecError {
        kernel: kernel.get(),
        reason: reason.to_string(),
    }
}

/// Compresses `input_bytes`, prepending the uncompressed length.
fn encode(kernel: KernelIndex, input_bytes: &[u8], level: i32) -> Result<Vec<u8>> {
    if input_bytes.is_empty() {
        return Ok(Vec::new());
    }

    let mut output_buf = Vec::with_capacity(input_bytes.len() / 2 + HEADER_LEN);
    output_buf.extend_from_slice(&(input_bytes.len() as u64).to_le_bytes());

    let mut encoder = Encoder::new(&mut output_buf, level).map_err(|e| codec_err(kernel, e))?;
    encoder
        .write_all(input_bytes)
        .map_err(|e| codec_err(kernel, e))?;

    // `finish` is essential to finalize the Zstd frame.
    encoder.finish().map_err(|e| codec_err(kernel, e))?;

    Ok(output_buf)
}

/// Decompresses a buffer produced by `encode`, checking the length header.
fn decode(kernel: KernelIndex, input_bytes: &[u8]) -> Result<Vec<u8>> {
    if input_bytes.is_empty() {
        return Ok(Vec::new());
    }

    if input_bytes.len() < HEADER_LEN {
        return Err(codec_err(
            kernel,
            "input stream too short to contain size header",
        ));
    }
    let (header, compressed_data) = input_bytes.split_at(HEADER_LEN);
    let mut len_bytes = [0u8; HEADER_LEN];
    len_bytes.copy_from_slice(header);
    let uncompressed_len = usize::try_from(u64::from_le_bytes(len_bytes)).unwrap_or(usize::MAX);

    let mut decompressed_data = Vec::with_capacity(uncompressed_len.min(MAX_PREALLOC));
    zstd::stream::copy_decode(compressed_data, &mut decompressed_data)
        .map_err(|e| codec_err(kernel, e))?;

    if decompressed_data.len() != uncompressed_len {
        return Err(codec_err(
            kernel,
            format!(
                "decompressed size does not match header, expected {}, got {}",
                uncompressed_len,
                decompressed_data.len()
            ),
        ));
    }

    Ok(decompressed_data)
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Maps kernel `i` to the `i`-th entry of a fixed, increasing Zstandard level table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZstdCodecProvider;

impl ZstdCodecProvider {
    /// The Zstandard level behind `kernel`.
    pub fn level(kernel: KernelIndex) -> i32 {
        LEVELS[kernel.slot()]
    }
}

impl CodecProvider for ZstdCodecProvider {
    fn compress(&self, kernel: KernelIndex, input: &[u8]) -> Result<Vec<u8>> {
        encode(kernel, input, Self::level(kernel))
    }

    fn decompress(&self, kernel: KernelIndex, input: &[u8]) -> Result<Vec<u8>> {
        decode(kernel, input)
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
