//! Run configuration: built-in defaults, optional TOML file, CLI overrides.
//!
//! Precedence is CLI flag > config file > built-in default. The output
//! basename additionally falls back to a name derived from the selection
//! pattern before the final `result` default.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional file-level configuration, loaded from `bench2gnuplot.toml`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub defaults: DefaultsConfig,
    pub gnuplot: GnuplotConfig,
}

/// Default flag values applied when the corresponding flag is absent.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DefaultsConfig {
    pub title: String,
    pub unit: String,
    pub outputfile: Option<String>,
}

/// How the plotting tool is invoked.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GnuplotConfig {
    /// Program name or path of the plotting tool.
    pub command: String,
    /// Name of the shared script file the emitter writes.
    pub script_file: String,
    /// Name of the gnuplot template each script line calls.
    pub template: String,
}

impl FileConfig {
    /// Load the TOML config at `path`. A missing file is not an error,
    /// the built-in defaults apply.
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("Failed to read {}: {e}", path.display())),
        };
        toml::from_str(&text).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
    }
}

/// Flag values as parsed from the command line; `None` means "not given".
#[derive(Debug, Default)]
pub struct Overrides {
    pub directory: PathBuf,
    pub pattern: Option<String>,
    pub title: Option<String>,
    pub unit: Option<String>,
    pub outputfile: Option<String>,
    pub render: bool,
}

/// Fully resolved run configuration. Immutable after [`Config::resolve`].
#[derive(Debug)]
pub struct Config {
    pub directory: PathBuf,
    pub pattern: String,
    pub title: String,
    pub unit: String,
    pub output_basename: String,
    pub render: bool,
    pub gnuplot: GnuplotConfig,
}

impl Config {
    pub fn resolve(cli: Overrides, file: FileConfig) -> Self {
        // Backslash escapes in the pattern come from shell quoting, drop them.
        let pattern = cli.pattern.unwrap_or_default().replace('\\', "");

        let output_basename = cli
            .outputfile
            .or(file.defaults.outputfile)
            .unwrap_or_else(|| {
                if pattern.is_empty() {
                    "result".to_string()
                } else {
                    basename_from_pattern(&pattern)
                }
            });

        Self {
            directory: cli.directory,
            pattern,
            title: cli.title.unwrap_or(file.defaults.title),
            unit: cli.unit.unwrap_or(file.defaults.unit),
            output_basename,
            render: cli.render,
            gnuplot: file.gnuplot,
        }
    }
}

/// Derive a data-file basename from a wildcard pattern.
///
/// Wildcards collapse to single dashes and the `.output` marker is dropped,
/// so `netperf-*-*.output` becomes `netperf`.
pub fn basename_from_pattern(pattern: &str) -> String {
    let mut name = pattern
        .replace("-*-", "-")
        .replace('*', "-")
        .replace("--", "-")
        .replace(".output", "");
    if let Some(stripped) = name.strip_suffix('-') {
        name = stripped.to_string();
    }
    if let Some(stripped) = name.strip_prefix('-') {
        name = stripped.to_string();
    }
    name
}

// --- Default implementations ---

impl Default for GnuplotConfig {
    fn default() -> Self {
        Self {
            command: "gnuplot".to_string(),
            script_file: "mymath".to_string(),
            template: "math.gpm".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn overrides(pattern: &str) -> Overrides {
        Overrides {
            directory: PathBuf::from("."),
            pattern: Some(pattern.to_string()),
            ..Overrides::default()
        }
    }

    #[test]
    fn basename_strips_wildcards_and_output_marker() {
        assert_eq!(basename_from_pattern("netperf-*-*.output"), "netperf");
        assert_eq!(basename_from_pattern("diag_network.output*"), "diag_network");
        assert_eq!(basename_from_pattern("mtu-*.output"), "mtu");
    }

    #[test]
    fn basename_has_no_leading_or_trailing_dash() {
        assert_eq!(basename_from_pattern("*-run.output"), "run");
        assert_eq!(basename_from_pattern("run-*.output"), "run");
    }

    #[test]
    fn resolve_derives_basename_from_pattern() {
        let config = Config::resolve(overrides("netperf-*-*.output"), FileConfig::default());
        assert_eq!(config.output_basename, "netperf");
    }

    #[test]
    fn resolve_strips_pattern_backslashes() {
        let config = Config::resolve(overrides(r"netperf\-\*.output"), FileConfig::default());
        assert_eq!(config.pattern, "netperf-*.output");
    }

    #[test]
    fn outputfile_flag_beats_derivation() {
        let mut cli = overrides("netperf-*.output");
        cli.outputfile = Some("custom".to_string());
        let config = Config::resolve(cli, FileConfig::default());
        assert_eq!(config.output_basename, "custom");
    }

    #[test]
    fn basename_defaults_to_result_without_pattern() {
        let config = Config::resolve(Overrides::default(), FileConfig::default());
        assert_eq!(config.output_basename, "result");
        assert_eq!(config.pattern, "");
    }

    #[test]
    fn file_defaults_fill_absent_flags_only() {
        let file: FileConfig = toml::from_str(
            r#"
            [defaults]
            title = " (jumbo frames)"
            unit = "mtu"
            "#,
        )
        .unwrap();
        let mut cli = overrides("netperf-*.output");
        cli.unit = Some("rx/tx".to_string());
        let config = Config::resolve(cli, file);
        assert_eq!(config.title, " (jumbo frames)");
        assert_eq!(config.unit, "rx/tx");
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let file = FileConfig::load(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(file.gnuplot.command, "gnuplot");
        assert_eq!(file.gnuplot.script_file, "mymath");
        assert_eq!(file.gnuplot.template, "math.gpm");
    }

    #[test]
    fn config_file_overrides_gnuplot_command() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bench2gnuplot.toml");
        fs::write(&path, "[gnuplot]\ncommand = \"gnuplot5\"\n").unwrap();
        let file = FileConfig::load(&path).unwrap();
        assert_eq!(file.gnuplot.command, "gnuplot5");
        // Unset keys keep their defaults.
        assert_eq!(file.gnuplot.template, "math.gpm");
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bench2gnuplot.toml");
        fs::write(&path, "not toml [").unwrap();
        assert!(FileConfig::load(&path).is_err());
    }
}
