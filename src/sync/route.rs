//! Navigation targets handed back by view actions.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::DashboardError;

/// A view the user can be sent to. Rendering and following a route is up to
/// the caller; views only say where to go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Team roster, `/`.
    Roster,
    /// Fixtures grouped by week, `/weeks`.
    Weeks,
    /// Simulation overview, `/fixture`.
    Fixture,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Roster => "/",
            Route::Weeks => "/weeks",
            Route::Fixture => "/fixture",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Route {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match normalized {
            "/" | "" => Ok(Route::Roster),
            "/weeks" | "weeks" => Ok(Route::Weeks),
            "/fixture" | "fixture" => Ok(Route::Fixture),
            _ => Err(DashboardError::UnknownRoute {
                path: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trips() {
        for route in [Route::Roster, Route::Weeks, Route::Fixture] {
            assert_eq!(route.path().parse::<Route>().unwrap(), route);
        }
    }

    #[test]
    fn test_parse_tolerates_missing_slash_and_trailing_slash() {
        assert_eq!("weeks".parse::<Route>().unwrap(), Route::Weeks);
        assert_eq!("/fixture/".parse::<Route>().unwrap(), Route::Fixture);
        assert_eq!(" / ".parse::<Route>().unwrap(), Route::Roster);
    }

    #[test]
    fn test_unknown_route() {
        match "/standings".parse::<Route>() {
            Err(DashboardError::UnknownRoute { path }) => assert_eq!(path, "/standings"),
            other => panic!("Expected UnknownRoute, got {:?}", other),
        }
    }

    #[test]
    fn test_display_is_path() {
        assert_eq!(Route::Weeks.to_string(), "/weeks");
    }
}
