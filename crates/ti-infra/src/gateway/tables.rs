//! Table surface of the gateway (`/rest/v1`).

use async_trait::async_trait;
use tracing::debug;

use ti_core::ports::{GatewayError, ProfileRepositoryPort};
use ti_core::registration::profile::Row;

use super::{transport_error, GatewayClient};

impl GatewayClient {
    async fn post_row(&self, table: &str, row: &Row, upsert: bool) -> Result<(), GatewayError> {
        let prefer = if upsert {
            "return=minimal,resolution=merge-duplicates"
        } else {
            "return=minimal"
        };
        let mut request = self
            .http()
            .post(self.endpoint(&format!("/rest/v1/{table}")))
            .header("apikey", self.anon_key())
            .bearer_auth(self.anon_key())
            .header("Prefer", prefer)
            .json(row);
        if upsert {
            request = request.query(&[("on_conflict", "id")]);
        }

        let response = request.send().await.map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }
        debug!(table, upsert, "row written");
        Ok(())
    }
}

#[async_trait]
impl ProfileRepositoryPort for GatewayClient {
    async fn upsert_user(&self, row: &Row) -> Result<(), GatewayError> {
        self.post_row("users", row, true).await
    }

    async fn insert_staff(&self, row: &Row) -> Result<(), GatewayError> {
        self.post_row("staff", row, false).await
    }

    async fn insert_driver(&self, row: &Row) -> Result<(), GatewayError> {
        self.post_row("drivers", row, false).await
    }
}
