//! Use case for signing the current user out.

use std::sync::Arc;

use ti_core::ports::{AuthGatewayPort, GatewayError};

pub struct LogoutUser {
    auth: Arc<dyn AuthGatewayPort>,
}

impl LogoutUser {
    pub fn new(auth: Arc<dyn AuthGatewayPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self, access_token: &str) -> Result<(), GatewayError> {
        self.auth.sign_out(access_token).await
    }
}
