//! Team roster view.

use serde::Serialize;

use crate::{
    api::{endpoints::Resource, types::Team, ApiClient},
    sync::{route::Route, state::ViewState, view::View},
};

#[derive(Debug, Clone, Default, Serialize)]
pub struct RosterData {
    pub teams: Vec<Team>,
}

/// Loads the team list once per mount and offers fixture generation.
#[derive(Debug)]
pub struct RosterLoader {
    api: ApiClient,
    view: View<RosterData>,
}

impl RosterLoader {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            view: View::default(),
        }
    }

    pub fn snapshot(&self) -> ViewState<RosterData> {
        self.view.snapshot()
    }

    pub fn view(&self) -> &View<RosterData> {
        &self.view
    }

    pub fn unmount(&self) {
        self.view.unmount();
    }

    /// Read the roster. No retry; remounting is the only way to try again.
    pub async fn mount(&self) -> bool {
        self.view
            .read(Resource::Teams, self.api.fetch_teams(), |data, teams| {
                data.teams = teams
            })
            .await
    }

    /// Ask the service for a new fixture set. Repeated calls are not
    /// deduplicated and may regenerate the schedule.
    ///
    /// Returns `Some(Route::Weeks)` on success; on failure the error banner is
    /// set and there is nowhere to go.
    pub async fn generate_fixtures(&self) -> Option<Route> {
        match self
            .view
            .write(Resource::GenerateFixtures, self.api.generate_fixtures())
            .await
        {
            Ok(()) => Some(Route::Weeks),
            Err(err) => {
                self.view.report(Resource::GenerateFixtures, err.to_string());
                None
            }
        }
    }
}
