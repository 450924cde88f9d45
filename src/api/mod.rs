//! Remote tournament service: endpoint table, wire types and HTTP client.

pub mod endpoints;
pub mod http;
pub mod types;

pub use endpoints::Resource;
pub use http::ApiClient;
pub use types::{DataEnvelope, Fixture, Prediction, Team, TeamStats};
