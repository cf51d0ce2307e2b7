//! `calc-mini`: a four-function calculator in the terminal.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use calc_mini::{Config, DisplayMode, ui};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DisplayArg {
    Truncate,
    Full,
}

impl From<DisplayArg> for DisplayMode {
    fn from(arg: DisplayArg) -> Self {
        match arg {
            DisplayArg::Truncate => DisplayMode::Truncate,
            DisplayArg::Full => DisplayMode::Full,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "calc-mini", version, about)]
struct Cli {
    /// Config file (default: <config dir>/calc-mini/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// How the display shows fractional values
    #[arg(long, value_enum)]
    display: Option<DisplayArg>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    if let Some(display) = cli.display {
        config.display = display.into();
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = Some(log_file);
    }

    // stdout belongs to the terminal UI, so logs only go to a file
    if let Some(path) = &config.log_file {
        init_tracing(path)?;
    }

    #[cfg(feature = "clipboard")]
    let clipboard = calc_mini::traits::SystemClipboard::new();
    #[cfg(not(feature = "clipboard"))]
    let clipboard = calc_mini::MemoryClipboard::default();

    ui::run(&config, clipboard).context("terminal error")?;
    Ok(())
}
