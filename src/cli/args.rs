//! CLI argument definitions using clap
//!
//! Commands:
//! - logdeck init --config <path>
//! - logdeck serve --config <path>
//! - logdeck query --config <path> [filter/sort/paging flags]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// logdeck - a deterministic log browsing service
#[derive(Parser, Debug)]
#[command(name = "logdeck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config file and create an empty data file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./logdeck.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./logdeck.json")]
        config: PathBuf,
    },

    /// Execute a single query against the data file and exit
    ///
    /// Flags are passed through the same parser as HTTP query
    /// parameters, so coercion and validation behave identically.
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./logdeck.json")]
        config: PathBuf,

        /// Case-sensitive substring to search for
        #[arg(long)]
        search: Option<String>,

        /// Comma-separated status list (ADDED,NOT_ADDED,BUG,DISORDER)
        #[arg(long)]
        statuses: Option<String>,

        /// Sort field: domain or standardDate
        #[arg(long)]
        order_by: Option<String>,

        /// Sort direction: asc or desc
        #[arg(long)]
        order_direction: Option<String>,

        /// Records to skip (integer text)
        #[arg(long)]
        skip: Option<String>,

        /// Page size (integer text)
        #[arg(long)]
        take: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
