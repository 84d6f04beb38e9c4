//! # ti-core
//!
//! Core domain models and business logic for the Travelintrips client.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies.

// Public module exports
pub mod config;
pub mod i18n;
pub mod ports;
pub mod registration;

// Re-export commonly used types at the crate root
pub use config::GatewayConfig;
pub use i18n::{translate, Locale};
pub use registration::{
    DocumentSlot, RegistrationDraft, RegistrationError, Role, RoleFamily, Stage, StagedFile,
    UploadResult, WizardAction, WizardEvent, WizardState, WizardStateMachine,
};
