//! worktime library root.
//! Exposes the CLI parser, the high-level run() function, and the pipeline
//! modules (loader → aggregator → formatter).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ .env first, so HOUR_PRICE / MEMBER can come from it
    dotenvy::dotenv().ok();

    // 2️⃣ parse CLI
    let cli = Cli::parse();

    // 3️⃣ resolve config ONCE, before touching any file
    let cfg = Config::resolve(&cli)?;

    // 4️⃣ hand everything to the report command
    cli::commands::report::handle(&cli, &cfg)
}
