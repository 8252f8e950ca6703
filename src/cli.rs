use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_EOL;
use crate::eol::EndOfLine;

/// Rusty Tidy - Normalize line endings and whitespace across a source tree
#[derive(Parser, Debug)]
#[command(name = "rusty-tidy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The target directory (defaults to the current working directory)
    #[arg(default_value = ".", value_name = "TARGET")]
    pub target: PathBuf,

    /// The end of line to use: CRLF ("\r\n") or LF ("\n")
    #[arg(short, long, value_enum, default_value_t = DEFAULT_EOL)]
    pub eol: EndOfLine,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["rusty-tidy"]);
        assert_eq!(cli.target, PathBuf::from("."));
        assert_eq!(cli.eol, DEFAULT_EOL);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn parse_target_and_eol() {
        let cli = Cli::parse_from(["rusty-tidy", "/src", "-e", "LF"]);
        assert_eq!(cli.target, PathBuf::from("/src"));
        assert_eq!(cli.eol, EndOfLine::Lf);

        let cli = Cli::parse_from(["rusty-tidy", "--eol", "CRLF", "proj"]);
        assert_eq!(cli.eol, EndOfLine::Crlf);
        assert_eq!(cli.target, PathBuf::from("proj"));
    }

    #[test]
    fn rejects_unknown_eol() {
        assert!(Cli::try_parse_from(["rusty-tidy", "--eol", "CR"]).is_err());
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::parse_from(["rusty-tidy", "-vvv"]);
        assert_eq!(cli.verbose, 3);
    }
}
