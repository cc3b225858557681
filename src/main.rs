//! panedock - dockable tabbed panels in the terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use panedock_app::config;
use panedock_core::prelude::*;

/// panedock - dockable tabbed panels kept in sync with a shared store
#[derive(Parser, Debug)]
#[command(name = "panedock")]
#[command(about = "Dockable tabbed panels kept in sync with a shared store", long_about = None)]
struct Args {
    /// Working directory to look for .panedock/config.toml in
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Read settings from this file instead
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run in headless mode (commands on stdin, NDJSON events on stdout)
    #[arg(long)]
    headless: bool,

    /// Write a default .panedock/config.toml and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let base_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        config::init_config_dir(&base_path)?;
        eprintln!(
            "Config written to {}",
            base_path.join(".panedock").join("config.toml").display()
        );
        return Ok(());
    }

    if let Some(path) = &args.config {
        if !path.exists() {
            return Err(Error::ConfigNotFound { path: path.clone() }.into());
        }
    }

    // Logs go to a file: stdout belongs to the TUI or the NDJSON stream
    panedock_core::logging::init()?;

    info!(
        "Mode: {}, working directory: {}",
        if args.headless { "headless" } else { "tui" },
        base_path.display()
    );

    let result = if args.headless {
        panedock::run_headless(&base_path, args.config.as_deref()).await
    } else {
        panedock::run_with_project(&base_path, args.config.as_deref()).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if let Ok(log_file) = panedock_core::logging::get_current_log_file() {
            eprintln!("See {} for details", log_file.display());
        }
    }
    info!("panedock exiting");

    Ok(result?)
}
