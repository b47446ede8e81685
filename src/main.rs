//! CLI entry point for camouflage-aware level generation

use camoplace::io::cli::{Cli, LevelBatch};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> camoplace::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut batch = LevelBatch::new(cli);
    batch.process().await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
