//! Per-stage and full-draft validation.
//!
//! Validation is field-scoped: the wizard shows errors inline next to the
//! offending input and refuses to advance while the active stage fails.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::registration::draft::RegistrationDraft;
use crate::registration::role::Role;
use crate::registration::stage::Stage;

pub const MIN_PASSWORD_LEN: usize = 6;

/// A form field that can carry an inline validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Role,
    Email,
    Password,
    VehicleName,
    VehicleType,
    VehicleBrand,
    LicensePlate,
    VehicleYear,
    VehicleColor,
    VehicleStatus,
}

impl Field {
    /// The stage whose tab renders this field.
    pub fn stage(&self) -> Stage {
        match self {
            Field::Role | Field::Email | Field::Password => Stage::Personal,
            Field::VehicleName
            | Field::VehicleType
            | Field::VehicleBrand
            | Field::LicensePlate
            | Field::VehicleYear
            | Field::VehicleColor
            | Field::VehicleStatus => Stage::Vehicle,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Role => "role",
            Field::Email => "email",
            Field::Password => "password",
            Field::VehicleName => "vehicle name",
            Field::VehicleType => "vehicle type",
            Field::VehicleBrand => "vehicle brand",
            Field::LicensePlate => "license plate",
            Field::VehicleYear => "vehicle year",
            Field::VehicleColor => "vehicle color",
            Field::VehicleStatus => "vehicle status",
        };
        write!(f, "{name}")
    }
}

/// An inline validation error attached to one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn email_format_ok(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

fn check_credentials(draft: &RegistrationDraft, errors: &mut Vec<FieldError>) {
    if draft.role.is_none() {
        errors.push(FieldError::new(Field::Role, "Role is required"));
    }
    let email = draft.email.trim();
    if email.is_empty() {
        errors.push(FieldError::new(Field::Email, "Email is required"));
    } else if !email_format_ok(email) {
        errors.push(FieldError::new(Field::Email, "Invalid email format"));
    }
    if draft.password.is_empty() {
        errors.push(FieldError::new(Field::Password, "Password is required"));
    } else if draft.password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            Field::Password,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
}

fn vehicle_field_checks(draft: &RegistrationDraft) -> Vec<FieldError> {
    let required: [(&str, Field, &str); 7] = [
        (draft.vehicle_name.as_str(), Field::VehicleName, "Vehicle name is required"),
        (draft.vehicle_type.as_str(), Field::VehicleType, "Vehicle type is required"),
        (draft.vehicle_brand.as_str(), Field::VehicleBrand, "Vehicle brand is required"),
        (draft.license_plate.as_str(), Field::LicensePlate, "License plate is required"),
        (draft.vehicle_year.as_str(), Field::VehicleYear, "Vehicle year is required"),
        (draft.vehicle_color.as_str(), Field::VehicleColor, "Vehicle color is required"),
        (draft.vehicle_status.as_str(), Field::VehicleStatus, "Vehicle status is required"),
    ];
    required
        .into_iter()
        .filter(|(value, _, _)| value.trim().is_empty())
        .map(|(_, field, message)| FieldError::new(field, message))
        .collect()
}

/// Validate the fields belonging to one stage.
///
/// `contact` and `documents` have no required fields; `vehicle` is only
/// enforced when the selected role requires it.
pub fn validate_stage(draft: &RegistrationDraft, stage: Stage) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    match stage {
        Stage::Personal => check_credentials(draft, &mut errors),
        Stage::Contact | Stage::Documents => {}
        Stage::Vehicle => {
            if draft.role.map(|r| r.requires_vehicle()).unwrap_or(false) {
                errors.extend(vehicle_field_checks(draft));
            }
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the whole draft before submission.
///
/// Mirrors the original schema: credentials always, and for Driver Mitra a
/// collective vehicle check flagged on the vehicle-name field.
pub fn validate_draft(draft: &RegistrationDraft) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_credentials(draft, &mut errors);
    if draft.role == Some(Role::DriverMitra) && !draft.vehicle_fields_complete() {
        errors.push(FieldError::new(
            Field::VehicleName,
            "Vehicle information is required for Driver Mitra",
        ));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
