//! Candidate log file discovery.

use std::path::Path;

use thiserror::Error;

/// Recognized log file suffixes. Matching is case-sensitive, so `GAME.LOG`
/// is not a candidate.
pub const LOG_SUFFIXES: &[&str] = &[".log", ".txt"];

/// Pipeline-fatal scan failures. Anything that goes wrong while listing the
/// target directory aborts the run; per-file problems do not (they become
/// [`crate::Diagnostic`]s instead).
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to list log directory {path}: {source}")]
    ListDir {
        path: String,
        source: std::io::Error,
    },
}

/// Lists candidate log files in `dir`.
///
/// A file is a candidate iff its name ends with one of [`LOG_SUFFIXES`].
/// Subdirectories are not entered. The returned order is whatever the
/// directory enumeration yields; callers must not rely on it.
pub fn collect_candidates(dir: &Path) -> Result<Vec<String>, ScanError> {
    let list_err = |source| ScanError::ListDir {
        path: dir.display().to_string(),
        source,
    };

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        if !entry.path().is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::debug!(name = ?name, "skipping non-UTF-8 file name");
            continue;
        };

        if LOG_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            candidates.push(name.to_string());
        }
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn filters_by_suffix() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.log"), "").unwrap();
        std::fs::write(temp.path().join("b.txt"), "").unwrap();
        std::fs::write(temp.path().join("c.md"), "").unwrap();
        std::fs::write(temp.path().join("notes"), "").unwrap();

        let mut candidates = collect_candidates(temp.path()).unwrap();
        candidates.sort_unstable();
        assert_eq!(candidates, vec!["a.log", "b.txt"]);
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("GAME.LOG"), "").unwrap();
        std::fs::write(temp.path().join("game.log"), "").unwrap();

        let candidates = collect_candidates(temp.path()).unwrap();
        assert_eq!(candidates, vec!["game.log"]);
    }

    #[test]
    fn skips_directories_with_matching_names() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("nested.log")).unwrap();
        std::fs::write(temp.path().join("real.log"), "").unwrap();

        let candidates = collect_candidates(temp.path()).unwrap();
        assert_eq!(candidates, vec!["real.log"]);
    }

    #[test]
    fn does_not_recurse_into_subdirectories() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("more");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("hidden.log"), "").unwrap();

        let candidates = collect_candidates(temp.path()).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn missing_directory_is_fatal() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let err = collect_candidates(&missing).unwrap_err();
        assert!(matches!(err, ScanError::ListDir { .. }));
        assert!(err.to_string().contains("does-not-exist"));
    }
}
