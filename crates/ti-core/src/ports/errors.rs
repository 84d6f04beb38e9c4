use thiserror::Error;

/// Failure talking to the managed backend.
///
/// `Service` carries the backend's own message verbatim; classification
/// into user-facing registration errors happens in the application layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Service(String),

    #[error("network error: {0}")]
    Transport(String),
}

impl GatewayError {
    /// The raw message, as fed to the auth-error classifier.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
