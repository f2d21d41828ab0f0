//! # anlz — Analyzer CLI
//!
//! Terminal dashboard separating static layout from live metric
//! ingestion. Single binary for watching, rendering, and feeding
//! metric samples.

mod commands;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
