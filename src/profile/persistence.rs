//! Defines the flat on-disk record format for profile stores.
//!
//! One profile per line, exactly four comma-separated fields and no header:
//!
//! ```text
//! name,content_type,alpha,kernel
//! ```
//!
//! Field values are never escaped, which is why profile names may not contain
//! commas. Loading is row-tolerant: a malformed row is reported and skipped,
//! and every other row is still applied.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use super::{CompressionProfile, ProfileStore};
use crate::catalog::MetricsCatalog;
use crate::error::{EasyCompressError, Result};
use crate::types::{ContentType, KernelIndex};

const FIELD_COUNT: usize = 4;

//==================================================================================
// Load Diagnostics
//==================================================================================

/// A row that `load` skipped, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostic {
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

impl RowDiagnostic {
    /// The diagnostic as a typed error, for callers that want to propagate it.
    pub fn to_error(&self) -> EasyCompressError {
        EasyCompressError::MalformedProfileRow {
            line: self.line_number,
            reason: self.reason.clone(),
        }
    }
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line_number, self.reason, self.line)
    }
}

/// The outcome of a successful `load`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows that were parsed and inserted into the store.
    pub applied: usize,
    /// Rows that were skipped, in file order.
    pub diagnostics: Vec<RowDiagnostic>,
}

impl LoadReport {
    /// `true` when no row was skipped.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

//==================================================================================
// Row Codec
//==================================================================================

fn format_record(profile: &CompressionProfile) -> String {
    // `{}` on f64 prints the shortest string that parses back to the same value.
    format!(
        "{},{},{},{}",
        profile.name, profile.content_type, profile.alpha, profile.kernel
    )
}

fn parse_record(line: &str) -> std::result::Result<CompressionProfile, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} comma-separated values, found {}",
            FIELD_COUNT,
            fields.len()
        ));
    }

    let content_type: ContentType = fields[1].parse().map_err(|e: EasyCompressError| e.to_string())?;
    let alpha: f64 = fields[2]
        .parse()
        .map_err(|_| format!("invalid alpha '{}'", fields[2]))?;
    let kernel: KernelIndex = fields[3]
        .parse()
        .map_err(|_| format!("invalid kernel '{}'", fields[3]))?;

    CompressionProfile::from_recorded(fields[0], content_type, alpha, kernel).map_err(|e| e.to_string())
}

//==================================================================================
// Store I/O
//==================================================================================

impl ProfileStore {
    /// Writes every profile as one record line, in name order.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for profile in self.list() {
            writeln!(writer, "{}", format_record(profile))?;
        }
        writer.flush()
    }

    /// Writes the store to `path`, replacing any existing file.
    ///
    /// # Errors
    /// Returns `PersistenceWriteError` if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let to_err = |source| EasyCompressError::PersistenceWriteError {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(to_err)?;
        self.write_to(BufWriter::new(file)).map_err(to_err)?;

        log::info!("Saved {} profiles to {}", self.len(), path.display());
        Ok(())
    }

    /// Reads records from `reader` and applies every well-formed one.
    ///
    /// The input is fully read before the store is touched, so an I/O failure
    /// leaves the store unchanged.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> io::Result<LoadReport> {
        let lines = reader.split(b'\n').collect::<io::Result<Vec<Vec<u8>>>>()?;
        Ok(self.apply_records(lines.iter().map(Vec::as_slice)))
    }

    /// Loads profiles from `path`, inserting or overwriting by name.
    ///
    /// Each profile keeps the kernel recorded in the file; the selector is not
    /// consulted. Malformed rows are skipped and reported in the returned
    /// `LoadReport`.
    ///
    /// # Errors
    /// Returns `PersistenceReadError` if the file cannot be opened or read, in
    /// which case the store is unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        // Raw bytes: encoding is checked per row, so one bad row cannot fail the file.
        let contents = std::fs::read(path).map_err(|source| EasyCompressError::PersistenceReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let report = self.apply_records(contents.split(|&b| b == b'\n'));
        log::info!(
            "Loaded {} profiles from {} ({} rows skipped)",
            report.applied,
            path.display(),
            report.diagnostics.len()
        );
        Ok(report)
    }

    /// Creates a fresh store over `catalog` and loads `path` into it.
    pub fn from_file(path: impl AsRef<Path>, catalog: Arc<MetricsCatalog>) -> Result<(Self, LoadReport)> {
        let mut store = Self::new(catalog);
        let report = store.load(path)?;
        Ok((store, report))
    }

    fn apply_records<'a>(&mut self, lines: impl Iterator<Item = &'a [u8]>) -> LoadReport {
        let mut report = LoadReport::default();

        for (idx, raw) in lines.enumerate() {
            let parsed = match std::str::from_utf8(raw) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => parse_record(line),
                Err(e) => Err(format!("row is not valid UTF-8 ({})", e)),
            };
            match parsed {
                Ok(profile) => {
                    self.insert(profile);
                    report.applied += 1;
                }
                Err(reason) => {
                    let diagnostic = RowDiagnostic {
                        line_number: idx + 1,
                        line: String::from_utf8_lossy(raw).trim_end_matches('\r').to_string(),
                        reason,
                    };
                    log::warn!("Skipping profile row, {}", diagnostic);
                    report.diagnostics.push(diagnostic);
                }
            }
        }

        report
    }
}
