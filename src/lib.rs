//! pickupwindow library root.
//! Pickup-date and time-slot eligibility for an order-ahead meal service:
//! exposes the CLI parser, the high-level run() function and the core modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod providers;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Dates { .. } => cli::commands::dates::handle(&cli.command, cfg),
        Commands::Slots { .. } => cli::commands::slots::handle(&cli.command, cfg).await,
        Commands::Schedule { .. } => cli::commands::schedule::handle(&cli.command, cfg).await,
        Commands::Book { .. } => cli::commands::book::handle(&cli.command, cfg).await,
    }
}

/// Logs go to stderr so stdout stays parseable (`--json`, booking output).
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pickupwindow=debug")
    } else {
        EnvFilter::try_from_env("PICKUPWINDOW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // a second init (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 2️⃣ load config once, honouring --config (init creates it, so it may not exist yet)
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(cli.config.as_deref().map(Path::new))?,
    };

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg).await
}
