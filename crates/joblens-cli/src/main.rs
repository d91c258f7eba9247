use anyhow::Context;
use clap::Parser;

use joblens_api::BoardClient;
use joblens_config::JoblensConfig;

mod cli;
mod commands;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("joblens error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = JoblensConfig::load_with_dotenv().context("failed to load configuration")?;

    let base_url = flags
        .base_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());
    tracing::debug!(%base_url, timeout_secs = config.api.timeout_secs, "board client ready");
    let client = BoardClient::new(base_url, config.api.timeout_secs);

    commands::dispatch(cli.command, &client, &config, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("JOBLENS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
