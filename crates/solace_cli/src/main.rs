use anyhow::{Context, Result};
use clap::Parser;
use rustyline::DefaultEditor;
use solace_core::SolaceConfig;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

mod chart;
mod cli;
mod commands;
mod logging;
mod session;

use cli::{Args, Command};
use session::Session;

fn main() {
    if let Err(e) = run() {
        eprintln!("solace error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let LoadedConfig { config, source } =
        load_config(args.config.as_deref(), SolaceConfig::default_path())?;
    let _log_guard = logging::init(
        &args.log_filter(&config.logging.level),
        config.logging.file.as_deref(),
        args.config.is_some(),
    )?;
    match source {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => info!("Using default config"),
    }

    let use_color = config.chart.color && !args.no_color;
    if !use_color {
        colored::control::set_override(false);
    }

    let mut stdout = io::stdout();
    match args.command.clone().unwrap_or(Command::Chat) {
        Command::Chat => {
            let mut editor = DefaultEditor::new().context("Failed to initialise line editor")?;
            Session::new(config, use_color).run(&mut editor, &mut stdout)
        }
        Command::Prompt { json } => commands::prompt(&mut stdout, json),
        Command::Recommend { mood, json } => commands::recommendation(&mut stdout, &mood, json),
        Command::Resources { topic, json } => commands::resources(&mut stdout, &topic, json),
    }
}

struct LoadedConfig {
    config: SolaceConfig,
    /// File the config came from; `None` when running on defaults.
    source: Option<PathBuf>,
}

/// An explicit `--config` must load; the default location may be absent or broken.
fn load_config(explicit: Option<&Path>, default: Option<PathBuf>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        return Ok(LoadedConfig {
            config: SolaceConfig::load(path)?,
            source: Some(path.to_path_buf()),
        });
    }

    match default {
        Some(path) if path.exists() => Ok(LoadedConfig {
            config: SolaceConfig::load_or_default(&path),
            source: Some(path),
        }),
        _ => Ok(LoadedConfig {
            config: SolaceConfig::from_env(),
            source: None,
        }),
    }
}
