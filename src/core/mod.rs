//! Core utilities for the tournament dashboard
//!
//! - `config`: base URL and timeout resolution
//! - `http`: request header construction

pub mod config;
pub mod http;

// Re-export commonly used items for convenience
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use http::headers_for;
