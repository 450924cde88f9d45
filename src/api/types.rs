use crate::cli::types::{FixtureId, TeamId, Week};
use serde::{Deserialize, Deserializer, Serialize};


/// Accepts a missing or `null` collection as empty.
fn de_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<Vec<T>> = Deserialize::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

/// Top-level envelope every service response wraps its payload in.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DataEnvelope<T> {
    #[serde(default = "Vec::new", deserialize_with = "de_null_as_empty")]
    pub data: Vec<T>,
}

impl<T> DataEnvelope<T> {
    pub fn into_rows(self) -> Vec<T> {
        self.data
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// One standings row, recomputed by the service after every simulated round.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamStats {
    pub id: TeamId,
    pub name: String,
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
    /// Goals scored; older service builds omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<i64>,
    pub goal_difference: i64,
    pub points: i64,
}

/// A scheduled pairing. Scores and result stay empty until the match is simulated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    pub week: Week,
    #[serde(default)]
    pub result: Option<String>,
}

impl Fixture {
    pub fn is_played(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Prediction {
    pub id: TeamId,
    /// Team name.
    pub name: String,
    /// 0..=100. Some service builds still emit the misspelled `parcentege` key.
    #[serde(alias = "parcentege")]
    pub percentage: f64,
}
