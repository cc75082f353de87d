//! This file is the root of the `easy_compress` Rust crate.
//!
//! The crate chooses, for a piece of content, which of eleven fixed compression
//! kernels to use. The choice is driven by a benchmark catalog and a caller
//! supplied `alpha` that trades compression ratio (`alpha -> 1`) against speed
//! (`alpha -> 0`). Decisions can be frozen under a name as profiles, persisted
//! and reloaded, and every compressed artifact records its kernel in its file
//! name so decompression needs no side channel.
//!
//! ```no_run
//! use easy_compress::{CompressionSession, EasyCompressConfig};
//!
//! # fn main() -> easy_compress::Result<()> {
//! let mut session = CompressionSession::new(EasyCompressConfig::default())?;
//! session.add_profile("web", "html", 0.8)?;
//! let artifact = session.compress_file_with_profile("index.html", "index", "web")?;
//! session.decompress_file(&artifact.path, "index.restored.html")?;
//! # Ok(())
//! # }
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod kernels;
pub mod profile;
pub mod selector;
pub mod session;
pub mod types;

mod error;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use catalog::{KernelMetricEntry, KernelMetrics, MetricsCatalog};
pub use config::EasyCompressConfig;
pub use dispatch::{kernel_for_compressed_input, name_for_compressed_output, CompressedArtifact, Dispatcher};
pub use error::{EasyCompressError, Result};
pub use kernels::{CodecProvider, ZstdCodecProvider};
pub use observability::enable_verbose_logging;
pub use profile::{CompressionProfile, LoadReport, ProfileStore, RowDiagnostic};
pub use selector::{score_kernels, select, KernelScore};
pub use session::CompressionSession;
pub use types::{ContentType, KernelIndex, KERNEL_COUNT};

// Lets `log_metric!` expand in crates that do not depend on `log` themselves.
#[doc(hidden)]
pub use log as __log;
