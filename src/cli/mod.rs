//! CLI module for the user directory
//!
//! Provides subcommands:
//! - `serve`: HTTP server rendering the directory
//! - `fetch`: load once and print the list as JSON

pub mod fetch;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// User Directory - browse and edit users loaded from a REST endpoint
#[derive(Parser)]
#[command(name = "user-directory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Load the users once and print them to stdout
    Fetch(fetch::FetchArgs),
}

/// Load configuration from `.env`, config files and environment
pub(crate) fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();
    AppConfig::load().unwrap_or_default()
}

pub(crate) fn init_logging(config: &AppConfig) {
    // Keep any subscriber that is already installed
    let _ = logging::init_logging(&config.logging);
}
