pub mod info;
pub mod oui;
pub mod search;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use macfind_common::config::Config;

#[derive(Parser)]
#[command(name = "macfind")]
#[command(about = "Find the vendor behind a MAC address.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Local OUI database, consulted before the remote service
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Base URL of the remote vendor service
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Remote lookup timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Increase log output (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the vendor of a MAC address
    #[command(alias = "s")]
    Search { address: String },
    /// Validate a MAC address and print its OUI
    #[command(alias = "o")]
    Oui { address: String },
    /// Show the effective configuration
    #[command(alias = "i")]
    Info,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let mut cfg = Config::default();
        if let Some(db) = &self.db {
            cfg.db_path = db.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            cfg.endpoint = endpoint.clone();
        }
        if let Some(ms) = self.timeout {
            cfg.timeout = Duration::from_millis(ms);
        }
        cfg
    }
}
