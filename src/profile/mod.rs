// In: src/profile/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: Compression Profiles
// ====================================================================================
//
// A profile freezes one selector decision under a name, so later compressions can
// reuse it without re-scoring:
//
//   add_profile(name, content_type, alpha)
//         |
//         `-> selector::select(catalog, content_type, alpha)  (exactly once)
//         |
//         `-> CompressionProfile { name, content_type, alpha, kernel }  (frozen)
//
// Persistence (see `persistence.rs`) writes and reads the frozen tuple verbatim.
// A loaded profile keeps the kernel recorded in the file even if the catalog has
// changed since; to pick up new benchmark data, recreate the profile.
//
// ====================================================================================

mod persistence;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::catalog::MetricsCatalog;
use crate::error::{EasyCompressError, Result};
use crate::selector;
use crate::types::{ContentType, KernelIndex};

pub use persistence::{LoadReport, RowDiagnostic};

/// A named, frozen `(content_type, alpha) -> kernel` decision.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionProfile {
    name: String,
    content_type: ContentType,
    alpha: f64,
    kernel: KernelIndex,
}

impl CompressionProfile {
    /// Creates a profile by running the selector once.
    pub fn select(
        name: impl Into<String>,
        content_type: ContentType,
        alpha: f64,
        catalog: &MetricsCatalog,
    ) -> Result<Self> {
        let name = validate_name(name.into())?;
        let kernel = selector::select(catalog, content_type, alpha)?;
        Ok(Self {
            name,
            content_type,
            alpha,
            kernel,
        })
    }

    /// Rebuilds a profile from a previously recorded decision, without re-selecting.
    pub fn from_recorded(
        name: impl Into<String>,
        content_type: ContentType,
        alpha: f64,
        kernel: KernelIndex,
    ) -> Result<Self> {
        let name = validate_name(name.into())?;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(EasyCompressError::AlphaOutOfRange(alpha));
        }
        Ok(Self {
            name,
            content_type,
            alpha,
            kernel,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn kernel(&self) -> KernelIndex {
        self.kernel
    }
}

impl fmt::Display for CompressionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Profile Name: {}, File Type: {}, Alpha: {}, Kernel: {}",
            self.name, self.content_type, self.alpha, self.kernel
        )
    }
}

/// Profile names become the first field of a comma-separated line, so they
/// must be non-empty, free of separators, and unchanged by the field trim
/// applied on load.
fn validate_name(name: String) -> Result<String> {
    if name.is_empty() || name.trim() != name || name.contains(&[',', '\n', '\r'][..]) {
        Err(EasyCompressError::InvalidProfileName(name))
    } else {
        Ok(name)
    }
}

/// A named collection of compression profiles.
///
/// Profiles are keyed by name; adding a profile under an existing name replaces
/// it. Listing is in name order. Mutation needs `&mut self`, so sharing a store
/// between threads requires the caller to wrap it (e.g. in an `RwLock`).
#[derive(Debug, Clone)]
pub struct ProfileStore {
    catalog: Arc<MetricsCatalog>,
    profiles: BTreeMap<String, CompressionProfile>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(MetricsCatalog::builtin())
    }
}

impl ProfileStore {
    /// Creates an empty store whose new profiles are selected against `catalog`.
    pub fn new(catalog: Arc<MetricsCatalog>) -> Self {
        Self {
            catalog,
            profiles: BTreeMap::new(),
        }
    }

    /// Selects a kernel for `(content_type, alpha)` and stores it under `name`,
    /// replacing any profile of the same name.
    pub fn add_profile(
        &mut self,
        name: impl Into<String>,
        content_type: ContentType,
        alpha: f64,
    ) -> Result<&CompressionProfile> {
        let profile = CompressionProfile::select(name, content_type, alpha, &self.catalog)?;
        log::info!(
            "Profile '{}' resolved {} at alpha {} to kernel {}",
            profile.name,
            content_type,
            alpha,
            profile.kernel
        );
        Ok(self.insert(profile))
    }

    /// Inserts an already-built profile, replacing any profile of the same name.
    pub fn insert(&mut self, profile: CompressionProfile) -> &CompressionProfile {
        let name = profile.name.clone();
        self.profiles.insert(name.clone(), profile);
        &self.profiles[&name]
    }

    /// Returns the frozen kernel of profile `name`.
    ///
    /// # Errors
    /// Returns `ProfileNotFound` if no profile has that name.
    pub fn get_kernel(&self, name: &str) -> Result<KernelIndex> {
        self.get(name)
            .map(CompressionProfile::kernel)
            .ok_or_else(|| EasyCompressError::ProfileNotFound(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&CompressionProfile> {
        self.profiles.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<CompressionProfile> {
        self.profiles.remove(name)
    }

    /// Iterates over all profiles in name order.
    pub fn list(&self) -> impl Iterator<Item = &CompressionProfile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The catalog new profiles are selected against.
    pub fn catalog(&self) -> &Arc<MetricsCatalog> {
        &self.catalog
    }
}

/// Renders one line per profile, in name order.
impl fmt::Display for ProfileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for profile in self.list() {
            writeln!(f, "{}", profile)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
