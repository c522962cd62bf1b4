//! Configuration and CLI argument handling

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

pub const DEFAULT_STORE_URL: &str = "http://127.0.0.1:20653";

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "countdown-board")]
#[command(about = "A shared countdown board: one operator, many polling display surfaces")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the backing store
    Serve {
        /// Host address to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind the store to
        #[arg(short, long, default_value = "20653")]
        port: u16,
    },

    /// Run a passive display surface
    Display {
        /// Base URL of the backing store
        #[arg(long, default_value = DEFAULT_STORE_URL)]
        store_url: String,

        /// Polling interval in milliseconds
        #[arg(long, default_value = "2000")]
        poll_interval_ms: u64,
    },

    /// Operator commands
    Admin {
        /// Base URL of the backing store
        #[arg(long, default_value = DEFAULT_STORE_URL)]
        store_url: String,

        #[command(subcommand)]
        action: AdminCommand,
    },
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Start a countdown
    Start {
        /// Board title (may be empty)
        #[arg(long, default_value = "")]
        title: String,

        /// Absolute target time, RFC 3339 (e.g. 2026-09-01T18:00:00Z)
        #[arg(long)]
        at: Option<DateTime<Utc>>,

        /// Duration in minutes from now
        #[arg(long)]
        minutes: Option<i64>,

        /// Start from a stored preset id instead
        #[arg(long, conflicts_with_all = ["title", "at", "minutes"])]
        preset: Option<String>,
    },

    /// Stop the countdown (title is kept, target cleared)
    Stop,

    /// Show the current record and presets
    Status,

    /// Live self-preview of the running countdown
    Watch {
        /// Polling interval in milliseconds
        #[arg(long, default_value = "2000")]
        poll_interval_ms: u64,
    },

    /// Manage duration presets
    Preset {
        #[command(subcommand)]
        action: PresetCommand,
    },
}

#[derive(Subcommand)]
pub enum PresetCommand {
    /// List presets
    List,
    /// Add a preset
    Add {
        /// Preset name (non-empty)
        title: String,
        /// Duration in minutes (positive)
        minutes: u32,
    },
    /// Delete a preset by id
    Delete { id: String },
}

impl Cli {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
