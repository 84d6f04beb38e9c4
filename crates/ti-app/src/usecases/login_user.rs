//! Use case for signing an existing user in.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use ti_core::ports::{AuthGatewayPort, AuthSession};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Password is required")]
    MissingPassword,
    /// The gateway rejected the credentials; its message is shown as-is.
    #[error("{0}")]
    Rejected(String),
}

pub struct LoginUser {
    auth: Arc<dyn AuthGatewayPort>,
}

impl LoginUser {
    pub fn new(auth: Arc<dyn AuthGatewayPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<AuthSession, LoginError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginError::MissingEmail);
        }
        if password.is_empty() {
            return Err(LoginError::MissingPassword);
        }

        let session = self
            .auth
            .sign_in(email, password)
            .await
            .map_err(|err| LoginError::Rejected(err.message()))?;
        info!(user_id = %session.user_id, "user signed in");
        Ok(session)
    }
}
