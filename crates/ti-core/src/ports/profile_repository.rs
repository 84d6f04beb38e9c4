//! Profile repository port - role-specific table writes

use async_trait::async_trait;

use crate::ports::errors::GatewayError;
use crate::registration::profile::Row;

/// Row-level access to the profile tables (`users`, `staff`, `drivers`).
#[async_trait]
pub trait ProfileRepositoryPort: Send + Sync {
    /// Upsert the generic profile row, keyed by account id.
    async fn upsert_user(&self, row: &Row) -> Result<(), GatewayError>;

    /// Insert a staff profile row.
    async fn insert_staff(&self, row: &Row) -> Result<(), GatewayError>;

    /// Insert a driver profile row.
    async fn insert_driver(&self, row: &Row) -> Result<(), GatewayError>;
}
