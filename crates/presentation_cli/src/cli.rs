//! Command-line arguments

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

/// WhatsAboveMe CLI
#[derive(Debug, Parser)]
#[command(name = "whatsaboveme")]
#[command(author, version, about = "Replies to messages with the object overhead", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "WHATSABOVEME_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Listen to the message stream and reply until it ends
    Run {
        /// Compose replies without following, publishing or posting
        #[arg(long)]
        dry_run: bool,

        /// Stop after this many stream records
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Handle one message and print the reply without posting it
    ///
    /// Example: whatsaboveme reply "@WhatsAboveMe Paris" --author stargazer
    Reply {
        #[command(flatten)]
        message: MessageArgs,
    },

    /// Print the intent of one message
    Classify {
        #[command(flatten)]
        message: MessageArgs,
    },

    /// Print what is overhead a place
    ///
    /// Example: whatsaboveme sky "Paris" --at 2014-11-08T21:30:00Z
    Sky {
        /// Place name as a user would write it
        place: String,

        /// Require every geocoder term to prefix-match the place text
        #[arg(long)]
        strict: bool,

        /// Instant to look up (RFC 3339, defaults to now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,

        /// Zone for the article's local time (platform label or IANA name)
        #[arg(long)]
        time_zone: Option<String>,
    },
}

impl Commands {
    /// Whether the command must run without side effects
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        match self {
            Self::Run { dry_run, .. } => *dry_run,
            Self::Reply { .. } | Self::Classify { .. } | Self::Sky { .. } => true,
        }
    }
}

/// One message given on the command line
#[derive(Debug, Clone, Args)]
pub struct MessageArgs {
    /// Message text
    pub text: String,

    /// Author handle, without the '@'
    #[arg(long, default_value = "stargazer")]
    pub author: String,

    /// Message id
    #[arg(long, default_value = "0")]
    pub id: String,

    /// Author's profile time zone label
    #[arg(long)]
    pub time_zone: Option<String>,

    /// Creation time in platform format (defaults to now)
    #[arg(long)]
    pub created_at: Option<String>,
}
