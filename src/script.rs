//! Emits the shared gnuplot script: one `call` line per metric series.
//!
//! Each line hands the external template the graph title, the series data
//! file (used both as data source and as output target), the y-axis label,
//! and the unit name. The script file is recreated fresh every run and left
//! on disk for the renderer.

use crate::config::Config;
use crate::metrics::METRICS;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Write the plot script and return its path.
pub fn write(config: &Config) -> Result<PathBuf, String> {
    let path = config.directory.join(&config.gnuplot.script_file);
    let file =
        File::create(&path).map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    let mut out = BufWriter::new(file);

    for metric in &METRICS {
        let data_file = format!("{}{}", config.output_basename, metric.suffix);
        writeln!(
            out,
            "call '{}' '{}{}' '{}' '' '{}' '{}' '{}'",
            config.gnuplot.template,
            metric.plot_title,
            config.title,
            data_file,
            data_file,
            metric.axis_label,
            config.unit,
        )
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    }

    out.flush()
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    Ok(path)
}
