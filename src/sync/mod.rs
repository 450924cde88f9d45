//! View controllers and the state they derive from the tournament service.
//!
//! Each controller owns its own [`ViewState`] and shares nothing with the
//! others. Cross-view consistency comes from re-reading the service after
//! every write, never from a client-side cache.

pub mod fixtures;
pub mod roster;
pub mod route;
pub mod state;
pub mod view;
pub mod weeks;

pub use fixtures::{FixtureSyncController, SimulationData};
pub use roster::{RosterData, RosterLoader};
pub use route::Route;
pub use state::ViewState;
pub use view::View;
pub use weeks::{group_by_week, WeekData, WeekGroupingView, WeekGroups};
