// In: src/error.rs

//! This module defines the single, unified error type for the entire easy-compress library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EasyCompressError>;

#[derive(Error, Debug)]
pub enum EasyCompressError {
    // =========================================================================
    // === Selection Errors
    // =========================================================================
    #[error("Alpha must lie within [0, 1], got {0}")]
    AlphaOutOfRange(f64),

    #[error("Unknown content type: '{0}'")]
    UnknownContentType(String),

    /// A kernel index outside `[1, K]` reached an API that requires a real kernel.
    #[error("Unknown kernel index {0}: kernels are numbered 1 through 11")]
    UnknownKernelIndex(usize),

    #[error("Kernel index must be a plain decimal number, got '{0}'")]
    InvalidKernelIndex(String),

    // =========================================================================
    // === Profile Store Errors
    // =========================================================================
    #[error("Profile not found: '{0}'")]
    ProfileNotFound(String),

    #[error("Invalid profile name '{0}': names must be non-empty with no surrounding whitespace, commas or line breaks")]
    InvalidProfileName(String),

    /// Only ever reported through a `RowDiagnostic`; `load` recovers from it.
    #[error("Malformed profile row on line {line}: {reason}")]
    MalformedProfileRow { line: usize, reason: String },

    #[error("Failed to read profiles from '{}': {source}", .path.display())]
    PersistenceReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write profiles to '{}': {source}", .path.display())]
    PersistenceWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // === Dispatcher Errors
    // =========================================================================
    #[error("Malformed compressed file name: '{0}'")]
    MalformedCompressedName(String),

    #[error("Input file not found: '{}'", .0.display())]
    InputNotFound(PathBuf),

    #[error("Kernel {kernel} codec failed: {reason}")]
    CodecError { kernel: usize, reason: String },

    // =========================================================================
    // === Catalog & Configuration Errors
    // =========================================================================
    #[error("Invalid metrics catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while reading a catalog or config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
