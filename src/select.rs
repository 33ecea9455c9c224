//! Selects benchmark log files from a directory by shell-glob pattern.

use glob::Pattern;
use std::path::{Path, PathBuf};

/// Errors that can occur while selecting input files.
#[derive(Debug)]
pub enum SelectError {
    /// The wildcard pattern is malformed.
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
    /// The directory could not be listed.
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for SelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectError::Pattern { pattern, source } => {
                write!(f, "invalid pattern {pattern:?}: {source}")
            }
            SelectError::ReadDir { path, source } => {
                write!(f, "failed to list {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SelectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SelectError::Pattern { source, .. } => Some(source),
            SelectError::ReadDir { source, .. } => Some(source),
        }
    }
}

/// List `dir` and return the regular-file names matching `pattern`,
/// sorted case-insensitively.
///
/// An empty pattern matches nothing; the caller decides whether an empty
/// result is an error.
pub fn find_files(dir: &Path, pattern: &str) -> Result<Vec<String>, SelectError> {
    let matcher = Pattern::new(pattern).map_err(|e| SelectError::Pattern {
        pattern: pattern.to_string(),
        source: e,
    })?;

    let entries = std::fs::read_dir(dir).map_err(|e| SelectError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SelectError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        // Non-UTF-8 names can't match a textual pattern, skip them.
        let Some(name) = entry.file_name().to_str().map(String::from) else {
            continue;
        };
        if matcher.matches(&name) {
            names.push(name);
        } else {
            tracing::debug!(file = %name, "does not match pattern");
        }
    }

    // Case-insensitive order, with the raw name as tie-breaker so repeated
    // runs list files identically.
    names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then(a.cmp(b)));
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Helper: create a temp directory holding the given empty files.
    fn setup_dir(files: &[&str]) -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        for name in files {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        tmp
    }

    #[test]
    fn matches_shell_glob() {
        let tmp = setup_dir(&["net.output.1", "net.output.2", "other.log"]);
        let names = find_files(tmp.path(), "net.output.*").unwrap();
        assert_eq!(names, vec!["net.output.1", "net.output.2"]);
    }

    #[test]
    fn question_mark_and_classes() {
        let tmp = setup_dir(&["run.output.1", "run.output.12", "run.output.a"]);
        assert_eq!(
            find_files(tmp.path(), "run.output.?").unwrap(),
            vec!["run.output.1", "run.output.a"]
        );
        assert_eq!(
            find_files(tmp.path(), "run.output.[0-9]*").unwrap(),
            vec!["run.output.1", "run.output.12"]
        );
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        let tmp = setup_dir(&["net.output.1"]);
        assert!(find_files(tmp.path(), "").unwrap().is_empty());
    }

    #[test]
    fn sort_is_case_insensitive() {
        let tmp = setup_dir(&["B.output.2", "a.output.1", "C.output.3"]);
        let names = find_files(tmp.path(), "*.output.*").unwrap();
        assert_eq!(names, vec!["a.output.1", "B.output.2", "C.output.3"]);
    }

    #[test]
    fn directories_are_not_selected() {
        let tmp = setup_dir(&["net.output.1"]);
        fs::create_dir(tmp.path().join("net.output.2")).unwrap();
        let names = find_files(tmp.path(), "net.output.*").unwrap();
        assert_eq!(names, vec!["net.output.1"]);
    }

    #[test]
    fn malformed_pattern_is_reported() {
        let tmp = setup_dir(&[]);
        assert!(matches!(
            find_files(tmp.path(), "net.output.["),
            Err(SelectError::Pattern { .. })
        ));
    }

    #[test]
    fn missing_directory_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let gone = tmp.path().join("nope");
        assert!(matches!(
            find_files(&gone, "*"),
            Err(SelectError::ReadDir { .. })
        ));
    }
}
