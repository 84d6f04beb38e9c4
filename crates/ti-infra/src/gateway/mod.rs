//! HTTP client for the managed backend.
//!
//! One `GatewayClient` serves the three REST surfaces the client needs:
//! authentication (`/auth/v1`), object storage (`/storage/v1`) and the
//! table API (`/rest/v1`). Timeouts are left to the client defaults; the
//! pipeline adds no retry layer.

pub mod auth;
pub mod storage;
pub mod tables;

use anyhow::Context;
use reqwest::StatusCode;
use serde_json::Value;

use ti_core::config::GatewayConfig;
use ti_core::ports::GatewayError;

pub struct GatewayClient {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("build HTTP client failed")?;
        Ok(Self { http, config })
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn anon_key(&self) -> &str {
        &self.config.anon_key
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.url, path)
    }

    /// Turn a non-2xx response into a `GatewayError::Service` carrying the
    /// backend's own message.
    pub(crate) async fn service_error(response: reqwest::Response) -> GatewayError {
        let status = response.status();
        match response.text().await {
            Ok(body) => GatewayError::Service(extract_message(&body, status)),
            Err(err) => GatewayError::Transport(err.to_string()),
        }
    }
}

/// Map a transport-level failure. The "network error" prefix is what the
/// pipeline's classifier keys on.
pub(crate) fn transport_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

/// Pull the human-readable message out of an error body.
///
/// The backend is not consistent about the field name across its services.
fn extract_message(body: &str, status: StatusCode) -> String {
    let fields = ["msg", "message", "error_description", "error"];
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            fields
                .iter()
                .find_map(|field| value.get(field)?.as_str().map(str::to_string))
        })
        .unwrap_or_else(|| format!("unexpected status {status}: {body}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_message_prefers_the_first_known_field() {
        let body = r#"{"msg":"User already registered","error":"conflict"}"#;
        assert_eq!(
            extract_message(body, StatusCode::UNPROCESSABLE_ENTITY),
            "User already registered"
        );
    }

    #[test]
    fn extract_message_reads_postgrest_style_bodies() {
        let body = r#"{"message":"duplicate key value violates unique constraint"}"#;
        assert_eq!(
            extract_message(body, StatusCode::CONFLICT),
            "duplicate key value violates unique constraint"
        );
    }

    #[test]
    fn extract_message_falls_back_to_the_status_and_body() {
        let message = extract_message("<html>504</html>", StatusCode::GATEWAY_TIMEOUT);
        assert!(message.contains("504 Gateway Timeout"));
    }
}
