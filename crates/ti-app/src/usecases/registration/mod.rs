//! Registration flow use cases.

pub mod wizard;

pub use wizard::{Banner, RegistrationWizard, SigninDestination};
