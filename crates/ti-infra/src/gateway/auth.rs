//! Auth surface of the gateway (`/auth/v1`).

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use ti_core::ports::{AuthGatewayPort, AuthSession, CreatedAccount, GatewayError};
use ti_core::registration::profile::Row;

use super::{transport_error, GatewayClient};

/// The signup endpoint answers with either the bare user object or a
/// session wrapping it, depending on email-confirmation settings.
fn user_object(body: &Value) -> &Value {
    body.get("user").filter(|user| user.is_object()).unwrap_or(body)
}

fn string_field(value: &Value, field: &str) -> Result<String, GatewayError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            GatewayError::Service(format!("malformed auth response: missing {field}"))
        })
}

#[async_trait]
impl AuthGatewayPort for GatewayClient {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        metadata: Row,
    ) -> Result<CreatedAccount, GatewayError> {
        let response = self
            .http()
            .post(self.endpoint("/auth/v1/signup"))
            .header("apikey", self.anon_key())
            .bearer_auth(self.anon_key())
            .json(&json!({
                "email": email,
                "password": password,
                "data": metadata,
            }))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        let body: Value = response.json().await.map_err(transport_error)?;
        let user = user_object(&body);
        let account = CreatedAccount {
            id: string_field(user, "id")?,
            email: string_field(user, "email")?,
        };
        debug!(account_id = %account.id, "signup accepted");
        Ok(account)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, GatewayError> {
        let response = self
            .http()
            .post(self.endpoint("/auth/v1/token"))
            .query(&[("grant_type", "password")])
            .header("apikey", self.anon_key())
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        let body: Value = response.json().await.map_err(transport_error)?;
        let user = body
            .get("user")
            .ok_or_else(|| GatewayError::Service("malformed auth response: missing user".into()))?;
        Ok(AuthSession {
            access_token: string_field(&body, "access_token")?,
            refresh_token: string_field(&body, "refresh_token")?,
            user_id: string_field(user, "id")?,
            email: string_field(user, "email")?,
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), GatewayError> {
        let response = self
            .http()
            .post(self.endpoint("/auth/v1/logout"))
            .header("apikey", self.anon_key())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }
        Ok(())
    }

    async fn request_password_reset(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), GatewayError> {
        let response = self
            .http()
            .post(self.endpoint("/auth/v1/recover"))
            .query(&[("redirect_to", redirect_to)])
            .header("apikey", self.anon_key())
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }
        Ok(())
    }
}
