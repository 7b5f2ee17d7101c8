mod cli;
mod deck;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::commands::run_cli;
use cli::opts::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flashbuckets=info,flashbuckets_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();
    run_cli(args)
}
