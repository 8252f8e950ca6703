//! Tidy command implementation

use std::path::Path;

use crate::config::TidyConfig;
use crate::error::{Result, TidyError};
use crate::rewriter::rewrite_file;
use crate::walker::iter_filepaths;

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TidySummary {
    /// Files rewritten
    pub files: usize,
    /// Files whose content changed
    pub changed: usize,
}

/// Tidy every file below `target`, stopping at the first error.
pub fn run(target: &Path, config: &TidyConfig) -> Result<TidySummary> {
    if !target.is_dir() {
        return Err(TidyError::NotADirectory(target.to_path_buf()));
    }

    tracing::info!(target = %target.display(), eol = %config.eol, "Tidying directory");

    let mut summary = TidySummary::default();

    for path in iter_filepaths(target) {
        let path = path?;
        let outcome = match rewrite_file(&path, config) {
            Ok(outcome) => outcome,
            Err(err @ TidyError::Decode { .. }) => {
                if let Some(failed) = err.path() {
                    tracing::error!(path = %failed.display(), "Failed to decode file");
                }
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        tracing::debug!(
            path = %outcome.path.display(),
            lines = outcome.lines,
            changed = outcome.changed,
            "Tidied file"
        );

        summary.files += 1;
        if outcome.changed {
            summary.changed += 1;
        }
    }

    tracing::info!(
        files = summary.files,
        changed = summary.changed,
        "Finished tidying"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eol::EndOfLine;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn counts_files_and_changes() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("dirty.txt"), "x  \n").unwrap();
        fs::write(tmp.path().join("clean.txt"), "y\n").unwrap();

        let summary = run(tmp.path(), &TidyConfig::new(EndOfLine::Lf)).unwrap();

        assert_eq!(summary, TidySummary { files: 2, changed: 1 });
    }

    #[test]
    fn rejects_file_target() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        fs::write(&file, "x").unwrap();

        let err = run(&file, &TidyConfig::default()).unwrap_err();
        assert!(matches!(err, TidyError::NotADirectory(p) if p == file));
    }

    #[test]
    fn stops_at_decode_error() {
        let tmp = TempDir::new().unwrap();
        let bad = tmp.path().join("bad.bin");
        fs::write(&bad, [0xc3, 0x28]).unwrap();

        let err = run(tmp.path(), &TidyConfig::default()).unwrap_err();
        assert!(matches!(err, TidyError::Decode { path, .. } if path == bad));
    }
}
