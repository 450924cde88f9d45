//! Tournament Dashboard Library
//!
//! Client-side view controllers for a round-robin tournament simulator. The
//! scheduling, simulation and prediction logic all live behind the
//! tournament service's HTTP API; this crate decides which endpoints to read,
//! in what order, how a failure in one resource is kept away from the others,
//! and which reads each write invalidates.
//!
//! ## Views
//!
//! - **Roster**: the team list, plus fixture generation
//! - **Weeks**: every fixture, grouped by round
//! - **Simulation overview**: upcoming fixtures, standings and predictions,
//!   plus play next / play all / clear
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tournament_dash::{core::ApiConfig, sync::FixtureSyncController, ApiClient};
//!
//! # async fn example() -> tournament_dash::Result<()> {
//! let api = ApiClient::new(&ApiConfig::default())?;
//! let overview = FixtureSyncController::new(api);
//!
//! overview.mount().await;
//! overview.play_next_round().await;
//!
//! let state = overview.snapshot();
//! println!("{:?}", state.message());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the dashboard at a service other than `http://localhost:8000/api`:
//! ```bash
//! export TOURNAMENT_API_URL=http://tournament.internal:8000/api
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod sync;

// Re-export commonly used types
pub use api::{ApiClient, Fixture, Prediction, Resource, Team, TeamStats};
pub use cli::types::{FixtureId, TeamId, Week};
pub use error::{DashboardError, Result};

pub const BASE_URL_ENV_VAR: &str = "TOURNAMENT_API_URL";
