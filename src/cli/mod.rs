//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::PlayerId;

/// Connection arguments shared between commands
#[derive(Debug, Args)]
pub struct ServerArgs {
    /// Analysis server base URL (or set `FPL_ANALYZER_URL` env var).
    #[clap(long, short = 'u')]
    pub base_url: Option<String>,

    /// Give up on a request after this many seconds (no timeout by default).
    #[clap(long)]
    pub timeout_secs: Option<u64>,
}

/// Output arguments shared between commands
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output the raw JSON payload instead of rendered HTML.
    #[clap(long)]
    pub json: bool,

    /// Write output to this file instead of stdout.
    #[clap(long, short)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a team and render status, captain picks, transfers and squad.
    ///
    /// Sends `POST /analyze` with `{ "team_id": ... }` and renders the response.
    Analyze {
        /// FPL team ID (or set `FPL_TEAM_ID` env var). Must be a positive integer.
        #[clap(long, short)]
        team_id: Option<String>,

        #[clap(flatten)]
        server: ServerArgs,

        #[clap(flatten)]
        output: OutputArgs,

        /// Render a complete HTML page instead of the results fragment.
        #[clap(long)]
        page: bool,
    },

    /// Fetch one player's detail record and render the detail modal with its chart.
    Player {
        /// Player ID as used by `GET /player/{id}`.
        player_id: PlayerId,

        #[clap(flatten)]
        server: ServerArgs,

        #[clap(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-analyzer", about = "FPL team analysis client")]
pub struct FplAnalyzer {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines.
    #[clap(long, global = true)]
    pub log_json: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
