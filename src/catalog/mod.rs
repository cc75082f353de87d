// In: src/catalog/mod.rs

//! The benchmark metrics catalog.
//!
//! For each of the `KERNEL_COUNT` kernels the catalog records the measured
//! bits-per-byte and compression time on every supported content type. It is
//! read-only reference data: a `MetricsCatalog` is constructed once (either the
//! compiled-in table or a JSON document loaded at startup) and then shared by
//! reference or through an `Arc`. Nothing in the crate mutates a catalog after
//! construction, so concurrent selectors never need a lock.

mod builtin;

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::error::{EasyCompressError, Result};
use crate::types::{ContentType, KernelIndex, KERNEL_COUNT};

//==================================================================================
// I. Data Model
//==================================================================================

/// One benchmark measurement of a kernel on a content type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct KernelMetricEntry {
    pub content_type: ContentType,
    /// Average compressed bits per input byte. Lower is better.
    pub bits_per_byte: f64,
    /// Measured compression time. Only relative magnitudes matter.
    pub compression_time: f64,
}

/// All measurements for a single kernel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct KernelMetrics {
    pub entries: Vec<KernelMetricEntry>,
}

impl KernelMetrics {
    /// Returns the entry for `content_type`, if this kernel was benchmarked on it.
    pub fn get(&self, content_type: ContentType) -> Option<&KernelMetricEntry> {
        self.entries.iter().find(|e| e.content_type == content_type)
    }
}

/// The on-disk shape of a catalog document.
#[derive(Deserialize)]
struct CatalogDocument {
    kernels: Vec<KernelMetrics>,
}

/// Exactly `KERNEL_COUNT` kernel metric sets; position `i` is kernel `i + 1`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MetricsCatalog {
    kernels: Vec<KernelMetrics>,
}

static BUILTIN: OnceLock<Arc<MetricsCatalog>> = OnceLock::new();

//==================================================================================
// II. Construction
//==================================================================================

impl MetricsCatalog {
    /// Builds a catalog from per-kernel metrics, enforcing the catalog invariants.
    ///
    /// # Errors
    /// Returns `InvalidCatalog` if the kernel count is not `KERNEL_COUNT`, if a
    /// kernel lists a content type twice, or if any metric is not a finite,
    /// strictly positive number.
    pub fn new(kernels: Vec<KernelMetrics>) -> Result<Self> {
        if kernels.len() != KERNEL_COUNT {
            return Err(EasyCompressError::InvalidCatalog(format!(
                "expected {} kernels, found {}",
                KERNEL_COUNT,
                kernels.len()
            )));
        }

        for (slot, metrics) in kernels.iter().enumerate() {
            let kernel = slot + 1;
            let mut seen = HashSet::new();
            for entry in &metrics.entries {
                if !seen.insert(entry.content_type) {
                    return Err(EasyCompressError::InvalidCatalog(format!(
                        "kernel {} lists content type '{}' more than once",
                        kernel, entry.content_type
                    )));
                }
                let valid = |v: f64| v.is_finite() && v > 0.0;
                if !valid(entry.bits_per_byte) || !valid(entry.compression_time) {
                    return Err(EasyCompressError::InvalidCatalog(format!(
                        "kernel {} has a non-positive metric for '{}'",
                        kernel, entry.content_type
                    )));
                }
            }
        }

        Ok(Self { kernels })
    }

    /// The compiled-in benchmark table, initialised on first use and shared afterwards.
    pub fn builtin() -> Arc<MetricsCatalog> {
        BUILTIN.get_or_init(|| Arc::new(builtin::build())).clone()
    }

    /// Parses and validates a catalog from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::new(doc.kernels)
    }

    /// Reads a JSON catalog from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&json)?;
        log::info!("Loaded metrics catalog from {}", path.as_ref().display());
        Ok(catalog)
    }

    /// Serializes the catalog in the same format `from_json_str` accepts.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//==================================================================================
// III. Lookup
//==================================================================================

impl MetricsCatalog {
    /// Fetches the metrics of kernel `kernel_index` (1-based) for `content_type`.
    ///
    /// Returns `None` both when the kernel has no entry for the content type and
    /// when the index lies outside `[1, KERNEL_COUNT]`. Callers that pass an
    /// out-of-range index have a bug; it is never a data condition.
    pub fn lookup(&self, kernel_index: usize, content_type: ContentType) -> Option<&KernelMetricEntry> {
        kernel_index
            .checked_sub(1)
            .and_then(|slot| self.kernels.get(slot))
            .and_then(|metrics| metrics.get(content_type))
    }

    /// All metrics recorded for `kernel`.
    pub fn metrics(&self, kernel: KernelIndex) -> &KernelMetrics {
        &self.kernels[kernel.slot()]
    }

    /// Iterates over every kernel with its metrics, in kernel order.
    pub fn kernels(&self) -> impl Iterator<Item = (KernelIndex, &KernelMetrics)> {
        KernelIndex::all().zip(self.kernels.iter())
    }

    pub fn kernel_count(&self) -> usize {
        self.kernels.len()
    }
}

//==================================================================================
// IV. Unit Tests
//==================================================================================
