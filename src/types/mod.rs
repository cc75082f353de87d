//! This module defines the core, strongly-typed values shared by the catalog,
//! the selector, the profile store and the dispatcher.
//!
//! It replaces the fragile string labels and bare integers of the benchmark
//! tables with two small validated types: `ContentType` and `KernelIndex`.

pub mod content_type;
pub mod kernel_index;

// Re-export the main type(s) for easier access.
pub use content_type::ContentType;
pub use kernel_index::{KernelIndex, KERNEL_COUNT};
