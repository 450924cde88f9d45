//! Type-safe wrappers for tournament data.

pub mod ids;

pub use ids::{FixtureId, TeamId, Week};
