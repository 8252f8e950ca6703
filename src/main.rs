use anyhow::Result;
use clap::Parser;

use rusty_tidy::cli::Cli;
use rusty_tidy::commands;
use rusty_tidy::config::TidyConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    let config = TidyConfig::new(cli.eol);

    tracing::debug!(?config, "Resolved configuration");

    let summary = commands::tidy::run(&cli.target, &config)?;

    tracing::debug!(?summary, "Run complete");

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rusty_tidy={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
