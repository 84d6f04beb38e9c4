//! Auth gateway port - account creation and session management
//!
//! Abstracts the managed backend's authentication surface so use cases can
//! register and sign users in without depending on the HTTP client.

use async_trait::async_trait;

use crate::ports::errors::GatewayError;
use crate::registration::profile::Row;

/// The account returned by a successful signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAccount {
    pub id: String,
    pub email: String,
}

/// An authenticated session returned by sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
    pub email: String,
}

/// Auth gateway port.
#[async_trait]
pub trait AuthGatewayPort: Send + Sync {
    /// Create an account with the given credentials and metadata bag.
    ///
    /// The metadata rides along for the backend's database triggers.
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        metadata: Row,
    ) -> Result<CreatedAccount, GatewayError>;

    /// Sign in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, GatewayError>;

    /// Invalidate the session behind the given access token.
    async fn sign_out(&self, access_token: &str) -> Result<(), GatewayError>;

    /// Request a password-reset email with a post-reset redirect.
    async fn request_password_reset(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), GatewayError>;
}
