use anyhow::Result;
use clap::Parser;
use tracing::info;

use sim::{load_config, run_sim, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let cfg = load_config(args.config.as_deref())?;
    info!(?cfg, "Sim config loaded");

    run_sim(&cfg)
}
