//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, keeping the core business logic
//! independent of the HTTP gateway and the filesystem.

pub mod auth_gateway;
pub mod document_store;
pub mod errors;
pub mod locale_store;
pub mod profile_repository;

pub use auth_gateway::{AuthGatewayPort, AuthSession, CreatedAccount};
pub use document_store::DocumentStorePort;
pub use errors::GatewayError;
pub use locale_store::LocaleStorePort;
pub use profile_repository::ProfileRepositoryPort;
