//! Object-storage surface of the gateway (`/storage/v1`).

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use ti_core::ports::{DocumentStorePort, GatewayError};

use super::{transport_error, GatewayClient};

#[async_trait]
impl DocumentStorePort for GatewayClient {
    /// Upload an object and return its public URL.
    ///
    /// The bucket is expected to be public; the URL is composed, not
    /// returned by the upload call.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<String, GatewayError> {
        let response = self
            .http()
            .post(self.endpoint(&format!("/storage/v1/object/{bucket}/{path}")))
            .header("apikey", self.anon_key())
            .bearer_auth(self.anon_key())
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        let public_url = self.endpoint(&format!("/storage/v1/object/public/{bucket}/{path}"));
        debug!(bucket, path, "object uploaded");
        Ok(public_url)
    }
}
