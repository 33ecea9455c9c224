//! Invokes gnuplot on the emitted script and cleans up its temp files.

use std::path::Path;
use std::process::Command;

/// Errors that can occur while rendering.
#[derive(Debug)]
pub enum RenderError {
    /// The plotting tool could not be spawned.
    Spawn {
        command: String,
        source: std::io::Error,
    },
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Spawn { command, source } => {
                write!(f, "could not run {command}: {source}")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Spawn { source, .. } => Some(source),
        }
    }
}

/// Run the plotting tool against the script file, blocking until it exits.
///
/// Only spawn failures are errors; the tool's own exit status is not
/// inspected.
pub fn run(command: &str, script: &Path) -> Result<(), RenderError> {
    println!("Running gnuplot rendering");
    let status = Command::new(command)
        .arg(script)
        .status()
        .map_err(|e| RenderError::Spawn {
            command: command.to_string(),
            source: e,
        })?;
    tracing::debug!(%command, ?status, "plotting tool exited");
    Ok(())
}

/// Remove leftover `gnuplot_temp_file.*` files from `dir`. Errors are ignored.
pub fn clean_temp_files(dir: &Path) {
    let Some(pattern) = dir.join("gnuplot_temp_file.*").to_str().map(String::from) else {
        return;
    };
    let Ok(paths) = glob::glob(&pattern) else {
        return;
    };
    for path in paths.flatten() {
        tracing::debug!(file = %path.display(), "removing temp file");
        let _ = std::fs::remove_file(path);
    }
}
