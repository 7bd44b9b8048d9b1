//! CLI entry point for symmetric mosaic generation and playback

use clap::Parser;
use tracing_subscriber::EnvFilter;
use truchet_sonifier::io::cli::{Cli, SessionRunner};
use truchet_sonifier::io::configuration::DEFAULT_LOG_FILTER;

fn main() -> truchet_sonifier::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let runner = SessionRunner::new(cli);
    runner.run()?;
    Ok(())
}
