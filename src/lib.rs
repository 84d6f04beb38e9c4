//! Travelintrips Client Library
//!
//! Registration and login client for the Travelintrips operations platform.
//! The domain lives in `ti-core`, use cases in `ti-app`, adapters in
//! `ti-infra`; this crate is the composition root.

pub mod bootstrap;

// Re-export the layers and the commonly used types
pub use ti_app::usecases::{
    Banner, LoginError, RegistrationOutcome, RegistrationWizard, SigninDestination,
};
pub use ti_core::{
    translate, DocumentSlot, GatewayConfig, Locale, RegistrationDraft, RegistrationError, Role,
    Stage, StagedFile,
};
pub use ti_infra::{FileLocaleStore, GatewayClient};

pub use bootstrap::{Client, ClientDeps};
