//! This module provides observability and diagnostics for the kernel selector
//! and the profile store.
//!
//! Every decision the selector makes can be traced through the `log` facade. The
//! `log_metric!` macro emits a structured key-value line at `debug` level, and
//! `enable_verbose_logging` installs an `env_logger` backend for hosts that do
//! not configure one themselves.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::Result;

/// Logs a structured key-value metric line at `debug` level.
///
/// # Example
/// ```
/// use easy_compress::log_metric;
/// let kernel = 7;
/// log_metric!("event"="select_kernel", "content_type"="text", "kernel"=&kernel);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if $crate::__log::log_enabled!($crate::__log::Level::Debug) {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            $crate::__log::debug!("EASY_COMPRESS_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `info`-level `env_logger` backend, once per process.
///
/// When `log_file` is given, records are appended to it instead of stderr.
/// Later calls are no-ops, and so is the first call if the host already
/// installed a logger.
///
/// # Errors
/// Returns `Io` if the log file cannot be opened for appending.
pub fn enable_verbose_logging(log_file: Option<&Path>) -> Result<()> {
    let target = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = target {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
