//! Endpoint table for the tournament service.
//!
//! Every remote call the dashboard makes is named by a [`Resource`]. The
//! resource carries its HTTP method, its path below the API base URL and the
//! text shown to the user when the call fails.

use reqwest::Method;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Teams,
    GenerateFixtures,
    AllFixtures,
    UpcomingFixtures,
    Predictions,
    Standings,
    PlayNextRound,
    PlayAllRounds,
    ClearFixtures,
}

impl Resource {
    pub const ALL: [Resource; 9] = [
        Resource::Teams,
        Resource::GenerateFixtures,
        Resource::AllFixtures,
        Resource::UpcomingFixtures,
        Resource::Predictions,
        Resource::Standings,
        Resource::PlayNextRound,
        Resource::PlayAllRounds,
        Resource::ClearFixtures,
    ];

    pub fn method(&self) -> Method {
        match self {
            Resource::Teams
            | Resource::AllFixtures
            | Resource::UpcomingFixtures
            | Resource::Predictions
            | Resource::Standings => Method::GET,
            Resource::GenerateFixtures | Resource::PlayNextRound | Resource::PlayAllRounds => {
                Method::POST
            }
            Resource::ClearFixtures => Method::DELETE,
        }
    }

    /// Path relative to the API base URL, without a leading slash.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Teams => "teams",
            Resource::GenerateFixtures => "fixture/create",
            Resource::AllFixtures => "fixture",
            Resource::UpcomingFixtures => "fixture/next-matches",
            Resource::Predictions => "fixture/predictions",
            Resource::Standings => "teams/points",
            Resource::PlayNextRound => "fixture/play",
            Resource::PlayAllRounds => "fixture/play-all",
            Resource::ClearFixtures => "fixture/delete",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Resource::Teams => "Failed to fetch teams",
            Resource::GenerateFixtures => "Failed to generate fixture",
            Resource::AllFixtures => "Failed to fetch fixtures",
            Resource::UpcomingFixtures => "Failed to fetch data",
            Resource::Predictions => "Failed to fetch prediction data",
            Resource::Standings => "Failed to fetch team points data",
            Resource::PlayNextRound => "Failed to play next fixture",
            Resource::PlayAllRounds => "Failed to play all fixtures",
            Resource::ClearFixtures => "Failed to clear fixtures",
        }
    }

    /// Writes send a JSON content type with an empty body.
    pub fn sends_json(&self) -> bool {
        matches!(
            self,
            Resource::GenerateFixtures | Resource::PlayNextRound | Resource::PlayAllRounds
        )
    }

    pub fn is_write(&self) -> bool {
        self.method() != Method::GET
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}", self.method(), self.path())
    }
}
