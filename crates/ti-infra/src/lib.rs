//! # ti-infra
//!
//! Infrastructure adapters for the Travelintrips client: the HTTP gateway
//! client implementing the core ports, the file-based locale store, and
//! environment configuration.

pub mod env;
pub mod gateway;
pub mod locale;

pub use env::{gateway_config_from_env, ENV_GATEWAY_ANON_KEY, ENV_GATEWAY_URL};
pub use gateway::GatewayClient;
pub use locale::FileLocaleStore;
