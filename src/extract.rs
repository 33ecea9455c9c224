//! Extracts labeled metric rows from benchmark logs into per-series data files.
//!
//! Every selected log contributes rows keyed by the integer "item" encoded in
//! its filename after the `.output.` marker (an MTU, a queue depth, whatever
//! quantity the benchmark varied between runs). A log line `label : value`
//! lands in the series file whose label substring it contains; the value text
//! is passed through untouched.

use crate::config::Config;
use crate::metrics::{self, METRICS};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ITEM_INDEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.output\.(\d+)").unwrap());

/// Integer item key encoded in a log filename, e.g. `net.output.1500` -> 1500.
pub fn item_index(file_name: &str) -> Option<u64> {
    ITEM_INDEX
        .captures(file_name)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// Errors that can occur during extraction.
#[derive(Debug)]
pub enum ExtractError {
    /// Failed to create or write a series data file.
    OutputFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to open or read an input log.
    InputFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::OutputFile { path, source } => {
                write!(f, "failed to write series file {}: {}", path.display(), source)
            }
            ExtractError::InputFile { path, source } => {
                write!(f, "failed to read log {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::OutputFile { source, .. } => Some(source),
            ExtractError::InputFile { source, .. } => Some(source),
        }
    }
}

/// One open data file per metric series, header already written.
struct SeriesFiles {
    // Parallel to METRICS.
    files: Vec<(PathBuf, BufWriter<File>)>,
}

impl SeriesFiles {
    /// Create all series files under `dir`, truncating prior runs, and write
    /// each `<unit> <quantity>` header line.
    fn create(dir: &Path, basename: &str, unit: &str) -> Result<Self, ExtractError> {
        let mut files = Vec::with_capacity(METRICS.len());
        for metric in &METRICS {
            let path = dir.join(format!("{basename}{}", metric.suffix));
            let file = File::create(&path).map_err(|e| ExtractError::OutputFile {
                path: path.clone(),
                source: e,
            })?;
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{unit} {}", metric.quantity.header_name()).map_err(|e| {
                ExtractError::OutputFile {
                    path: path.clone(),
                    source: e,
                }
            })?;
            files.push((path, writer));
        }
        Ok(Self { files })
    }

    fn write_row(&mut self, slot: usize, item: u64, value: &str) -> Result<(), ExtractError> {
        let (path, writer) = &mut self.files[slot];
        writeln!(writer, "{item} {value}").map_err(|e| ExtractError::OutputFile {
            path: path.clone(),
            source: e,
        })
    }

    fn finish(self) -> Result<(), ExtractError> {
        for (path, mut writer) in self.files {
            writer.flush().map_err(|e| ExtractError::OutputFile {
                path: path.clone(),
                source: e,
            })?;
        }
        Ok(())
    }
}

/// Read every selected log in order and route matching `label : value` lines
/// into the series data files.
///
/// Logs whose filename lacks a parsable item index are skipped silently.
pub fn run(files: &[String], config: &Config) -> Result<(), ExtractError> {
    let dir = &config.directory;
    let mut series = SeriesFiles::create(dir, &config.output_basename, &config.unit)?;

    for name in files {
        let Some(item) = item_index(name) else {
            tracing::debug!(file = %name, "no item index in filename, skipping");
            continue;
        };
        let path = dir.join(name);
        let file = File::open(&path).map_err(|e| ExtractError::InputFile {
            path: path.clone(),
            source: e,
        })?;
        let mut rows = 0u32;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| ExtractError::InputFile {
                path: path.clone(),
                source: e,
            })?;
            let Some((label, value)) = line.split_once(" : ") else {
                continue;
            };
            if let Some(slot) = metrics::route(label, value) {
                series.write_row(slot, item, value)?;
                rows += 1;
            }
        }
        tracing::debug!(file = %name, item, rows, "extracted");
    }

    series.finish()
}
