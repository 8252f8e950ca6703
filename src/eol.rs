//! End of line conventions.

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

use crate::error::TidyError;

/// Line terminator written between lines and at the end of every file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum EndOfLine {
    /// Carriage-return line-feed (`\r\n`)
    #[default]
    #[value(name = "CRLF")]
    Crlf,
    /// Line-feed (`\n`)
    #[value(name = "LF")]
    Lf,
}

impl EndOfLine {
    /// The terminator sequence.
    pub fn as_str(self) -> &'static str {
        match self {
            EndOfLine::Crlf => "\r\n",
            EndOfLine::Lf => "\n",
        }
    }

    /// The name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            EndOfLine::Crlf => "CRLF",
            EndOfLine::Lf => "LF",
        }
    }

    /// Look up a variant by its exact name.
    pub fn from_name(name: &str) -> Result<Self, TidyError> {
        match name {
            "CRLF" => Ok(EndOfLine::Crlf),
            "LF" => Ok(EndOfLine::Lf),
            other => Err(TidyError::InvalidEol(other.to_string())),
        }
    }
}

impl FromStr for EndOfLine {
    type Err = TidyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for EndOfLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
