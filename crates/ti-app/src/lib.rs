//! # ti-app
//!
//! Application use cases for the Travelintrips client. Depends only on the
//! `ti-core` domain and its ports; adapters are injected by the
//! composition root.

pub mod usecases;

pub use usecases::{
    Banner, ChangeLocale, GetLocale, LoginError, LoginUser, LogoutUser, RegisterUser,
    RegistrationOutcome, RegistrationWizard, ResetPassword, SigninDestination,
};
