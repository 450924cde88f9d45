//! Simulation overview: upcoming fixtures, standings and predictions.
//!
//! The three slices come from independent endpoints and fail independently.
//! Reads never short-circuit one another: a failed read leaves its slice as it
//! was, puts its text on the error banner and lets the next read run. Every
//! write is followed by a fixed, sequential refresh so that predictions are
//! recomputed against the standings the write produced.

use serde::Serialize;

use crate::{
    api::{
        endpoints::Resource,
        types::{Fixture, Prediction, TeamStats},
        ApiClient,
    },
    sync::{route::Route, state::ViewState, view::View},
};

pub const PLAY_NEXT_SUCCESS: &str = "Next fixture played successfully!";
pub const PLAY_ALL_SUCCESS: &str = "All fixtures played successfully!";
pub const CLEAR_SUCCESS: &str = "Fixtures cleared successfully!";

#[derive(Debug, Clone, Default, Serialize)]
pub struct SimulationData {
    /// Unplayed fixtures.
    pub fixtures: Vec<Fixture>,
    pub standings: Vec<TeamStats>,
    pub predictions: Vec<Prediction>,
}

#[derive(Debug)]
pub struct FixtureSyncController {
    api: ApiClient,
    view: View<SimulationData>,
}

impl FixtureSyncController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            view: View::default(),
        }
    }

    pub fn snapshot(&self) -> ViewState<SimulationData> {
        self.view.snapshot()
    }

    pub fn view(&self) -> &View<SimulationData> {
        &self.view
    }

    pub fn unmount(&self) {
        self.view.unmount();
    }

    pub async fn load_fixtures(&self) -> bool {
        self.view
            .read(
                Resource::UpcomingFixtures,
                self.api.fetch_upcoming_fixtures(),
                |data, fixtures| data.fixtures = fixtures,
            )
            .await
    }

    pub async fn load_standings(&self) -> bool {
        self.view
            .read(
                Resource::Standings,
                self.api.fetch_standings(),
                |data, standings| data.standings = standings,
            )
            .await
    }

    /// An empty response means "no update": predictions shown earlier stay.
    pub async fn load_predictions(&self) -> bool {
        self.view
            .read(
                Resource::Predictions,
                self.api.fetch_predictions(),
                |data, predictions| {
                    if !predictions.is_empty() {
                        data.predictions = predictions;
                    }
                },
            )
            .await
    }

    /// Initial read sequence. Fixtures then predictions (whatever the
    /// fixtures outcome) run alongside standings; returns once both settle.
    pub async fn mount(&self) {
        let fixtures_then_predictions = async {
            self.load_fixtures().await;
            self.load_predictions().await;
        };
        tokio::join!(fixtures_then_predictions, self.load_standings());
    }

    async fn refresh_after_play(&self) {
        self.load_predictions().await;
        self.load_standings().await;
    }

    /// Play the next round. The refresh runs even when the write failed.
    pub async fn play_next_round(&self) -> bool {
        let outcome = self
            .view
            .write(Resource::PlayNextRound, self.api.play_next_round())
            .await;
        self.view
            .announce(Resource::PlayNextRound, &outcome, PLAY_NEXT_SUCCESS);
        self.refresh_after_play().await;
        outcome.is_ok()
    }

    /// Play every remaining round. Unlike [`Self::play_next_round`], the
    /// refresh only runs when the write succeeded.
    pub async fn play_all_rounds(&self) -> bool {
        let outcome = self
            .view
            .write(Resource::PlayAllRounds, self.api.play_all_rounds())
            .await;
        self.view
            .announce(Resource::PlayAllRounds, &outcome, PLAY_ALL_SUCCESS);
        if outcome.is_ok() {
            self.refresh_after_play().await;
        }
        outcome.is_ok()
    }

    /// Clear every fixture. Nothing is re-read; on success the caller is sent
    /// back to the roster.
    pub async fn clear_fixtures(&self) -> Option<Route> {
        let outcome = self
            .view
            .write(Resource::ClearFixtures, self.api.clear_fixtures())
            .await;
        self.view
            .announce(Resource::ClearFixtures, &outcome, CLEAR_SUCCESS);
        outcome.ok().map(|()| Route::Roster)
    }
}
