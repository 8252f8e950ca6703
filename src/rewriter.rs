//! In-place rewriting of a single file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cleaner::clean_line;
use crate::config::TidyConfig;
use crate::error::{Result, TidyError};

/// What happened to one rewritten file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub path: PathBuf,
    /// Number of lines written
    pub lines: usize,
    /// Whether the new content differs from what was on disk
    pub changed: bool,
}

/// Iterator over the lines of a text, treating `\r\n`, `\r` and `\n` each as
/// one terminator. Terminators are not included in the yielded lines, and a
/// terminated final line does not produce an extra empty line.
pub struct UniversalLines<'a> {
    rest: &'a str,
}

/// Split `text` into lines using universal newlines.
pub fn universal_lines(text: &str) -> UniversalLines<'_> {
    UniversalLines { rest: text }
}

impl<'a> Iterator for UniversalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(|c| c == '\r' || c == '\n') {
            Some(idx) => {
                let line = &self.rest[..idx];
                let terminator = if self.rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[idx + terminator..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Produce the tidied form of `text`.
///
/// Every line is cleaned, trailing blank lines are dropped, and the lines are
/// joined and terminated with `config.eol`. The result always ends with
/// exactly one terminator, so an empty input becomes a single terminator.
pub fn tidy_text(text: &str, replace_tabs: bool, config: &TidyConfig) -> String {
    let mut lines: Vec<String> = universal_lines(text)
        .map(|line| clean_line(line, replace_tabs, config.tab_width))
        .collect();

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let eol = config.eol.as_str();
    let mut out = lines.join(eol);
    out.push_str(eol);
    out
}

/// Whether tabs in `path` must be kept literally.
fn keeps_tabs(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(TidyConfig::keeps_tabs)
}

/// Tidy the file at `path` in place.
///
/// The file is read and transformed in full before anything is written, so a
/// decode failure leaves it untouched.
pub fn rewrite_file(path: &Path, config: &TidyConfig) -> Result<RewriteOutcome> {
    let replace_tabs = !keeps_tabs(path);

    let bytes = fs::read(path).map_err(|e| TidyError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = String::from_utf8(bytes).map_err(|e| TidyError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    let tidied = tidy_text(&text, replace_tabs, config);
    let changed = tidied != text;

    fs::write(path, &tidied).map_err(|e| TidyError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let lines = universal_lines(&tidied).count();
    tracing::trace!(path = %path.display(), replace_tabs, "Rewrote file");

    Ok(RewriteOutcome {
        path: path.to_path_buf(),
        lines,
        changed,
    })
}
