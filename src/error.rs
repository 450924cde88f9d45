//! Error types for the tournament dashboard

use crate::api::endpoints::Resource;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;


#[derive(Error, Debug)]
pub enum DashboardError {
    /// The service answered with a non-2xx status. Error bodies are not parsed.
    #[error("{}", .resource.failure_message())]
    Status {
        resource: Resource,
        status: reqwest::StatusCode,
    },

    /// The request never produced a usable response (connect, timeout, decode).
    #[error("{}: {}", .resource.failure_message(), .source)]
    Transport {
        resource: Resource,
        source: reqwest::Error,
    },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid API base URL: {url}")]
    InvalidBaseUrl { url: String },

    #[error("Unknown route: {path}")]
    UnknownRoute { path: String },
}

impl DashboardError {
    /// The remote resource this failure belongs to, if any.
    pub fn resource(&self) -> Option<Resource> {
        match self {
            DashboardError::Status { resource, .. } | DashboardError::Transport { resource, .. } => {
                Some(*resource)
            }
            _ => None,
        }
    }
}
