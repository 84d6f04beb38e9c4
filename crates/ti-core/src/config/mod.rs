//! Gateway configuration domain model
//!
//! The model lives here; loading it from the environment is an
//! infrastructure concern.

use serde::{Deserialize, Serialize};

/// Connection settings for the managed backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base endpoint URL, without a trailing slash.
    pub url: String,
    /// Public (anonymous) API key sent with every request.
    pub anon_key: String,
}

impl GatewayConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }
}
