//! Registration error taxonomy and auth-error classification.
//!
//! The submission pipeline never surfaces a raw backend message for a known
//! failure class; it classifies by substring the way the original client
//! did and shows the curated message instead.

use thiserror::Error;

use crate::registration::document::DocumentSlot;
use crate::registration::validate::Field;

/// Everything that can go wrong between "submit" and "account created".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("{field} is required")]
    MissingRequiredField { field: Field },

    #[error("unknown role: {label}")]
    UnknownRole { label: String },

    #[error("File upload failed ({slot}): {message}")]
    UploadFailure {
        slot: DocumentSlot,
        message: String,
    },

    #[error("An account with this email already exists")]
    DuplicateAccount,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password is too weak. Please use at least 6 characters")]
    WeakPassword,

    #[error("Network error. Please check your internet connection and try again")]
    NetworkError,

    #[error("Error uploading files. Please try again")]
    StorageError,

    #[error("Registration failed due to database configuration. Please try again or contact support.")]
    DatabaseTriggerError,

    #[error("{message}")]
    UnknownAuthError { message: String },

    /// Non-fatal: the account exists but a profile row was not written.
    #[error("failed to write {table} profile: {message}")]
    ProfileWriteFailure {
        table: &'static str,
        message: String,
    },
}

/// Classify a raw account-creation error message.
///
/// Substring matching over the lowercased message; the database-trigger
/// check runs first because its message also mentions the user record.
pub fn classify_auth_error(message: &str) -> RegistrationError {
    let lowered = message.to_lowercase();

    if lowered.contains("database error saving new user") {
        RegistrationError::DatabaseTriggerError
    } else if lowered.contains("duplicate key") || lowered.contains("already registered") {
        RegistrationError::DuplicateAccount
    } else if lowered.contains("invalid email") {
        RegistrationError::InvalidEmail
    } else if lowered.contains("weak password") || lowered.contains("password") {
        RegistrationError::WeakPassword
    } else if lowered.contains("network") {
        RegistrationError::NetworkError
    } else if lowered.contains("storage") {
        RegistrationError::StorageError
    } else {
        RegistrationError::UnknownAuthError {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_maps_to_duplicate_account() {
        let err = classify_auth_error(
            "duplicate key value violates unique constraint \"users_email_key\"",
        );
        assert_eq!(err, RegistrationError::DuplicateAccount);
        assert_eq!(
            err.to_string(),
            "An account with this email already exists"
        );
    }

    #[test]
    fn already_registered_maps_to_duplicate_account() {
        assert_eq!(
            classify_auth_error("User already registered"),
            RegistrationError::DuplicateAccount
        );
    }

    #[test]
    fn trigger_failure_wins_over_other_substrings() {
        assert_eq!(
            classify_auth_error("Database error saving new user"),
            RegistrationError::DatabaseTriggerError
        );
    }

    #[test]
    fn password_mentions_map_to_weak_password() {
        assert_eq!(
            classify_auth_error("Password should be at least 6 characters"),
            RegistrationError::WeakPassword
        );
        // "invalid email" takes precedence over the broad password match
        assert_eq!(
            classify_auth_error("invalid email or password"),
            RegistrationError::InvalidEmail
        );
    }

    #[test]
    fn network_and_storage_classes() {
        assert_eq!(
            classify_auth_error("network error: connection refused"),
            RegistrationError::NetworkError
        );
        assert_eq!(
            classify_auth_error("storage quota exceeded"),
            RegistrationError::StorageError
        );
    }

    #[test]
    fn unknown_messages_pass_through() {
        let err = classify_auth_error("something odd happened");
        assert_eq!(
            err,
            RegistrationError::UnknownAuthError {
                message: "something odd happened".into()
            }
        );
        assert_eq!(err.to_string(), "something odd happened");
    }
}
