// In: src/session.rs

//! The configured, stateful facade over the selection engine.
//!
//! A `CompressionSession` is built once from an `EasyCompressConfig`. It owns
//! the shared catalog, one `ProfileStore`, and a `Dispatcher`, and exposes the
//! library's file-level entry points. Callers that only need the pure pieces
//! can use `selector`, `ProfileStore` and `Dispatcher` directly.

use std::path::Path;
use std::sync::Arc;

use crate::catalog::MetricsCatalog;
use crate::config::EasyCompressConfig;
use crate::dispatch::{CompressedArtifact, Dispatcher};
use crate::error::{EasyCompressError, Result};
use crate::kernels::{CodecProvider, ZstdCodecProvider};
use crate::observability;
use crate::profile::{CompressionProfile, LoadReport, ProfileStore};
use crate::selector;
use crate::types::{ContentType, KernelIndex};

pub struct CompressionSession<P = ZstdCodecProvider> {
    config: EasyCompressConfig,
    profiles: ProfileStore,
    dispatcher: Dispatcher<P>,
    startup_report: Option<LoadReport>,
}

impl CompressionSession<ZstdCodecProvider> {
    /// Creates a session backed by the reference Zstandard provider.
    pub fn new(config: EasyCompressConfig) -> Result<Self> {
        Self::with_provider(config, ZstdCodecProvider)
    }
}

impl<P: CodecProvider> CompressionSession<P> {
    /// Creates a session over an arbitrary codec provider.
    ///
    /// Loads the catalog from `catalog_path` if configured, and the profile store
    /// from `profiles_path` if that file exists. A missing profile file yields an
    /// empty store; an unreadable one is an error.
    pub fn with_provider(config: EasyCompressConfig, provider: P) -> Result<Self> {
        config.validate()?;

        if config.verbose_logging {
            observability::enable_verbose_logging(config.log_file.as_deref())?;
        }

        let catalog = match &config.catalog_path {
            Some(path) => Arc::new(MetricsCatalog::from_json_file(path)?),
            None => MetricsCatalog::builtin(),
        };

        let mut profiles = ProfileStore::new(catalog.clone());
        let startup_report = match &config.profiles_path {
            Some(path) if path.exists() => Some(profiles.load(path)?),
            _ => None,
        };

        Ok(Self {
            config,
            profiles,
            dispatcher: Dispatcher::new(provider, catalog),
            startup_report,
        })
    }

    pub fn config(&self) -> &EasyCompressConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<MetricsCatalog> {
        self.dispatcher.catalog()
    }

    pub fn dispatcher(&self) -> &Dispatcher<P> {
        &self.dispatcher
    }

    /// The report of the profile load performed at startup, if any.
    pub fn startup_report(&self) -> Option<&LoadReport> {
        self.startup_report.as_ref()
    }

    //==============================================================================
    // Selection & Profiles
    //==============================================================================

    /// Selects a kernel for a content-type label, falling back to `default_alpha`.
    pub fn select(&self, content_type: &str, alpha: Option<f64>) -> Result<KernelIndex> {
        selector::select_for_label(
            self.catalog(),
            content_type,
            alpha.unwrap_or(self.config.default_alpha),
        )
    }

    pub fn add_profile(&mut self, name: &str, content_type: &str, alpha: f64) -> Result<&CompressionProfile> {
        let content_type: ContentType = content_type.parse()?;
        self.profiles.add_profile(name, content_type, alpha)
    }

    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    pub fn profiles_mut(&mut self) -> &mut ProfileStore {
        &mut self.profiles
    }

    /// Writes the profile store to the configured `profiles_path`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if no `profiles_path` is configured.
    pub fn save_profiles(&self) -> Result<()> {
        let path = self.config.profiles_path.as_ref().ok_or_else(|| {
            EasyCompressError::InvalidConfig("no profiles_path configured".to_string())
        })?;
        self.profiles.save(path)
    }

    //==============================================================================
    // File Operations
    //==============================================================================

    /// Compresses `input` with the kernel selected for `(content_type, alpha)`.
    pub fn compress_file(
        &self,
        input: impl AsRef<Path>,
        output_base: impl AsRef<Path>,
        content_type: &str,
        alpha: Option<f64>,
    ) -> Result<CompressedArtifact> {
        let content_type: ContentType = content_type.parse()?;
        self.dispatcher.compress_file(
            input,
            output_base,
            content_type,
            alpha.unwrap_or(self.config.default_alpha),
        )
    }

    /// Compresses `input` with the kernel frozen in profile `profile_name`.
    pub fn compress_file_with_profile(
        &self,
        input: impl AsRef<Path>,
        output_base: impl AsRef<Path>,
        profile_name: &str,
    ) -> Result<CompressedArtifact> {
        self.dispatcher
            .compress_file_with_profile(input, output_base, &self.profiles, profile_name)
    }

    /// Decompresses a `.easy_compressed_<k>` file into `output`.
    pub fn decompress_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<KernelIndex> {
        self.dispatcher.decompress_file(input, output)
    }
}
