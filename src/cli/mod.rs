//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::Week;

use crate::sync::Route;

/// Connection and output settings shared by every command
#[derive(Debug, Args)]
pub struct GlobalOptions {
    /// Tournament API base URL (or set `TOURNAMENT_API_URL` env var).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds. No timeout when omitted.
    #[clap(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Output view state as JSON instead of tables.
    #[clap(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "tournament-dash", about = "Round-robin tournament simulator dashboard")]
pub struct Dashboard {
    #[clap(flatten)]
    pub options: GlobalOptions,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the teams taking part.
    Teams,

    /// Generate a fixture set, then show it grouped by week.
    ///
    /// Each call may produce a new schedule; nothing guards against repeats.
    Generate,

    /// Show every fixture grouped by week.
    Weeks {
        /// Only show this week.
        #[clap(long, short)]
        week: Option<Week>,

        /// Continue into the simulation overview afterwards.
        #[clap(long)]
        start: bool,
    },

    /// Show standings, upcoming fixtures and predictions.
    Overview,

    /// Play the next week, then refresh predictions and standings.
    PlayNext,

    /// Play all remaining weeks, then refresh predictions and standings.
    PlayAll,

    /// Delete every fixture and return to the team list.
    Clear,

    /// Show the view mounted at a route path: `/`, `/weeks` or `/fixture`.
    Open {
        #[clap(value_parser = clap::value_parser!(Route))]
        route: Route,
    },
}
