//! CLI command definitions and dispatch.

pub mod feed;
pub mod render;
pub mod watch;

use std::path::PathBuf;

use analyzer_common::config::AnalyzerConfig;
use clap::{Parser, Subcommand};

/// Analyzer — terminal dashboard for live system metrics.
#[derive(Parser, Debug)]
#[command(name = analyzer_common::constants::BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to a JSON config file; `~/.analyzer/config.json` when absent.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the live dashboard TUI.
    Watch(watch::WatchArgs),
    /// Render the dashboard once as plain text.
    Render(render::RenderArgs),
    /// Run a metric source headless, printing samples as JSON.
    Feed(feed::FeedArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if config loading or command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Watch(args) => watch::execute(args, config),
        Command::Render(args) => render::execute(args, &config),
        Command::Feed(args) => feed::execute(args, &config),
    }
}

/// Loads config from the explicit path, or from the default config file
/// when one exists, or falls back to the built-in defaults.
fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<AnalyzerConfig> {
    match path {
        Some(path) => Ok(AnalyzerConfig::load(path)?),
        None => load_default(&analyzer_common::constants::default_config_file()),
    }
}

fn load_default(path: &std::path::Path) -> anyhow::Result<AnalyzerConfig> {
    if path.exists() {
        Ok(AnalyzerConfig::load(path)?)
    } else {
        Ok(AnalyzerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn explicit_config_path_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "capacity": 42 }}"#).expect("write");

        let config = load_config(Some(file.path())).expect("should load");
        assert_eq!(config.capacity, 42);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        assert!(load_config(Some(std::path::Path::new("/nonexistent/config.json"))).is_err());
    }

    #[test]
    fn absent_default_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = load_default(&dir.path().join("config.json")).expect("should default");
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn existing_default_file_is_loaded() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "tick_ms": 250 }"#).expect("write");

        let config = load_default(&path).expect("should load");
        assert_eq!(config.tick_ms, 250);
    }
}
