use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::StoreKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "ladder ranking backend")]
pub struct Cli {
    /// State backend (overrides LADDER_STORE)
    #[arg(long, global = true, value_enum)]
    pub store: Option<StoreKind>,

    /// State file or database path (overrides LADDER_STATE_PATH)
    #[arg(long, global = true)]
    pub state_path: Option<PathBuf>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the HTTP command server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Challenge another player
    Request { requester: String, opponent: String },
    /// Accept a challenge (run as the challenged player)
    Approve { requester: String, approver: String },
    /// Report a won match (run as the original challenger)
    Report { winner: String, loser: String },
    /// Set the scoring period (RFC 3339 timestamps)
    SetEvent {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Show one player's standing
    Standing { player: String },
    /// Show all players ordered by points
    Leaderboard,
    /// List open match requests
    Pending {
        /// Only requests involving this player
        #[arg(short, long)]
        player: Option<String>,
    },
    /// Show the scoring period
    Event,
    /// Print shell completions
    Completions { shell: Shell },
}
