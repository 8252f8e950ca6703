use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum TidyError {
    #[error("Failed to decode '{path}' as UTF-8 text: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Unknown end of line '{0}' (expected CRLF or LF)")]
    InvalidEol(String),
}

impl TidyError {
    /// Path of the file or directory the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            TidyError::Decode { path, .. }
            | TidyError::Io { path, .. }
            | TidyError::Walk { path, .. }
            | TidyError::NotADirectory(path) => Some(path.as_path()),
            TidyError::InvalidEol(_) => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TidyError>;
