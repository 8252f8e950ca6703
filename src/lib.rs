//! Rusty Tidy - Normalize line endings and whitespace across a source tree
//!
//! This crate provides functionality for:
//! - Walking a directory tree while skipping VCS and build directories
//! - Stripping trailing whitespace and expanding tabs line by line
//! - Rewriting files with a uniform end of line and a single final terminator

pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod eol;
pub mod error;
pub mod rewriter;
pub mod walker;

// Re-export commonly used types
pub use config::TidyConfig;
pub use eol::EndOfLine;
pub use error::{Result, TidyError};
