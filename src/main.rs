use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use peerboard::config::{Config, ConfigStore};
use peerboard::logging::init_tracing;
use peerboard::ui::runtime;

/// Terminal peer-review portal: announcements, projects, ratings and chat
/// for a classroom, rendered as a TUI.
#[derive(Debug, Parser)]
#[command(name = "peerboard", version, about)]
struct Cli {
    /// Path to the config file. Defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write diagnostic logs to this file (also: PEERBOARD_LOG env var).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref());

    let path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    let store = ConfigStore::new(config, path);

    runtime::run(store).context("terminal UI error")?;
    Ok(())
}
