//! HTTP client for the tournament service.
//!
//! Reads return the rows found under the response's `data` field. Writes
//! only check the status; their bodies are never read. Any non-2xx status is
//! a failure of that resource regardless of what the body says.

use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    api::{
        endpoints::Resource,
        types::{DataEnvelope, Fixture, Prediction, Team, TeamStats},
    },
    core::{headers_for, ApiConfig},
    DashboardError, Result,
};

#[cfg(test)]
mod tests;

const USER_AGENT: &str = concat!("tournament-dash/", env!("CARGO_PKG_VERSION"));

/// Handle on the remote service. Cheap to clone; clones share a connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    fn request(&self, resource: Resource) -> RequestBuilder {
        self.client
            .request(resource.method(), self.url_for(resource))
            .headers(headers_for(resource))
    }

    async fn send(&self, resource: Resource) -> Result<Response> {
        debug!("{} {}", resource.method(), self.url_for(resource));

        let response = self
            .request(resource)
            .send()
            .await
            .map_err(|source| DashboardError::Transport { resource, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Status { resource, status });
        }
        Ok(response)
    }

    async fn fetch_rows<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>> {
        let envelope = self
            .send(resource)
            .await?
            .json::<DataEnvelope<T>>()
            .await
            .map_err(|source| DashboardError::Transport { resource, source })?;
        Ok(envelope.into_rows())
    }

    async fn perform(&self, resource: Resource) -> Result<()> {
        self.send(resource).await.map(|_| ())
    }

    /// `GET /teams`
    pub async fn fetch_teams(&self) -> Result<Vec<Team>> {
        self.fetch_rows(Resource::Teams).await
    }

    /// `GET /fixture`
    pub async fn fetch_all_fixtures(&self) -> Result<Vec<Fixture>> {
        self.fetch_rows(Resource::AllFixtures).await
    }

    /// `GET /fixture/next-matches`
    pub async fn fetch_upcoming_fixtures(&self) -> Result<Vec<Fixture>> {
        self.fetch_rows(Resource::UpcomingFixtures).await
    }

    /// `GET /fixture/predictions`. May legitimately be empty.
    pub async fn fetch_predictions(&self) -> Result<Vec<Prediction>> {
        self.fetch_rows(Resource::Predictions).await
    }

    /// `GET /teams/points`
    pub async fn fetch_standings(&self) -> Result<Vec<TeamStats>> {
        self.fetch_rows(Resource::Standings).await
    }

    /// `POST /fixture/create`. Not idempotent: each call may produce a new schedule.
    pub async fn generate_fixtures(&self) -> Result<()> {
        self.perform(Resource::GenerateFixtures).await
    }

    /// `POST /fixture/play`
    pub async fn play_next_round(&self) -> Result<()> {
        self.perform(Resource::PlayNextRound).await
    }

    /// `POST /fixture/play-all`
    pub async fn play_all_rounds(&self) -> Result<()> {
        self.perform(Resource::PlayAllRounds).await
    }

    /// `DELETE /fixture/delete`
    pub async fn clear_fixtures(&self) -> Result<()> {
        self.perform(Resource::ClearFixtures).await
    }
}
