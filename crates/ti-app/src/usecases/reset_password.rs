//! Use case for requesting a password-reset email.

use std::sync::Arc;

use ti_core::ports::{AuthGatewayPort, GatewayError};

pub struct ResetPassword {
    auth: Arc<dyn AuthGatewayPort>,
    /// Where the reset email sends the user afterwards.
    redirect_to: String,
}

impl ResetPassword {
    pub fn new(auth: Arc<dyn AuthGatewayPort>, redirect_to: impl Into<String>) -> Self {
        Self {
            auth,
            redirect_to: redirect_to.into(),
        }
    }

    pub async fn execute(&self, email: &str) -> Result<(), GatewayError> {
        self.auth
            .request_password_reset(email.trim(), &self.redirect_to)
            .await
    }
}
