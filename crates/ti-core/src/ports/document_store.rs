//! Document store port - object storage uploads

use async_trait::async_trait;
use bytes::Bytes;

use crate::ports::errors::GatewayError;

/// Object-storage port for registration documents.
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// Upload an object and return its public URL.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<String, GatewayError>;
}
