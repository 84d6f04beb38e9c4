//! Registration domain: draft, roles, stages, validation, projection.

pub mod document;
pub mod draft;
pub mod error;
pub mod profile;
pub mod role;
pub mod stage;
pub mod state_machine;
pub mod validate;

pub use document::{DocumentSlot, UploadResult, DOCUMENT_BUCKET};
pub use draft::{RegistrationDraft, StagedFile};
pub use error::{classify_auth_error, RegistrationError};
pub use role::{Role, RoleFamily};
pub use stage::Stage;
pub use state_machine::{WizardAction, WizardEvent, WizardState, WizardStateMachine};
pub use validate::{validate_draft, validate_stage, Field, FieldError};
