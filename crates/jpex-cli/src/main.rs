//! Interactive JMESPath explorer
//!
//! Loads a JSON document, then opens a terminal session where every edit of
//! the expression line re-runs the query and updates the result pane live.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use jpex_core::{Controller, Document, JmespathEngine, SAMPLE_DOCUMENT};

use jpex_cli::config::{Config, Theme};
use jpex_cli::tui::App;

#[derive(Parser)]
#[command(name = "jpex")]
#[command(about = "Interactively explore JSON with JMESPath expressions", long_about = None)]
struct Cli {
    /// JSON file to load instead of the built-in sample document
    input: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Visual theme override
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Append debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.verbose)?;
    }

    let config_path = cli.config.clone().or_else(Config::default_path);
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let theme = cli.theme.unwrap_or(config.theme);

    let document = match &cli.input {
        Some(path) => Document::from_path(path, config.indent)?,
        None => Document::from_text(SAMPLE_DOCUMENT, config.indent)?,
    };

    let source = cli
        .input
        .as_ref()
        .map_or_else(|| "built-in sample".to_string(), |path| path.display().to_string());
    tracing::info!(
        %source,
        bytes = document.pretty().len(),
        ?theme,
        indent = config.indent,
        "session starting"
    );

    let controller = Controller::new(JmespathEngine::new(), document);
    App::new(controller, theme).run()?;

    Ok(())
}

/// Append tracing output to a file. Stdout belongs to the TUI while the
/// session runs.
fn init_logging(path: &Path, verbose: u8) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
