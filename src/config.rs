use crate::eol::EndOfLine;

/// Basenames that are never descended into or processed.
pub const EXCLUDED_NAMES: &[&str] = &[".git", ".mypy_cache", "__pycache__", "target"];

/// Basenames whose literal tabs are significant and must be kept.
pub const KEEP_TABS_NAMES: &[&str] = &["Makefile", "makefile"];

/// Columns between tab stops.
pub const TAB_WIDTH: usize = 4;

/// End of line used when none is requested.
pub const DEFAULT_EOL: EndOfLine = EndOfLine::Crlf;

/// Immutable settings shared by every file in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TidyConfig {
    /// Terminator written after every line
    pub eol: EndOfLine,
    /// Tab stop spacing used when expanding tabs
    pub tab_width: usize,
}

impl Default for TidyConfig {
    fn default() -> Self {
        Self {
            eol: DEFAULT_EOL,
            tab_width: TAB_WIDTH,
        }
    }
}

impl TidyConfig {
    /// Create a config for the given end of line with the default tab width
    pub fn new(eol: EndOfLine) -> Self {
        Self {
            eol,
            ..Self::default()
        }
    }

    /// Whether a basename is skipped by the walker
    pub fn is_excluded(name: &str) -> bool {
        EXCLUDED_NAMES.contains(&name)
    }

    /// Whether a basename keeps its literal tabs
    pub fn keeps_tabs(name: &str) -> bool {
        KEEP_TABS_NAMES.contains(&name)
    }
}
