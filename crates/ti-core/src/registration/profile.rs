//! Projection of a validated draft into backend payloads.
//!
//! Three shapes come out of one draft: the metadata bag attached to the
//! account-creation call, the generic `users` row, and the role-family row
//! (`staff` or `drivers`). All keys are snake_case column names; empty
//! fields are omitted except the name/role block the backend triggers rely
//! on.

use serde_json::{json, Map, Value};

use crate::registration::document::UploadResult;
use crate::registration::draft::RegistrationDraft;
use crate::registration::role::Role;

/// Column name → value map, as sent to the backend.
pub type Row = Map<String, Value>;

fn put_non_empty(row: &mut Row, key: &str, value: &str) {
    let trimmed = value.trim();
    if !trimmed.is_empty() {
        row.insert(key.to_string(), json!(trimmed));
    }
}

fn put_personal_and_contact(row: &mut Row, draft: &RegistrationDraft) {
    put_non_empty(row, "ktp_address", &draft.ktp_address);
    put_non_empty(row, "ktp_number", &draft.ktp_number);
    put_non_empty(row, "religion", &draft.religion);
    put_non_empty(row, "ethnicity", &draft.ethnicity);
    put_non_empty(row, "education", &draft.education);
    put_non_empty(row, "phone_number", &draft.phone_number);
    put_non_empty(row, "family_phone_number", &draft.family_phone_number);
    put_non_empty(row, "license_number", &draft.license_number);
    put_non_empty(row, "license_expiry", &draft.license_expiry);
}

fn put_vehicle(row: &mut Row, draft: &RegistrationDraft) {
    put_non_empty(row, "vehicle_name", &draft.vehicle_name);
    put_non_empty(row, "vehicle_type", &draft.vehicle_type);
    put_non_empty(row, "vehicle_brand", &draft.vehicle_brand);
    put_non_empty(row, "license_plate", &draft.license_plate);
    put_non_empty(row, "vehicle_year", &draft.vehicle_year);
    put_non_empty(row, "vehicle_color", &draft.vehicle_color);
    put_non_empty(row, "vehicle_status", &draft.vehicle_status);
}

fn put_document_urls(row: &mut Row, uploads: &UploadResult) {
    for (slot, url) in uploads.iter() {
        row.insert(slot.url_key().to_string(), json!(url));
    }
}

/// Name/role block that is always present, even with empty name parts.
///
/// `name` is what the auth service uses for the display name; the trigger
/// reads `role`/`role_id` to route the profile insert.
fn put_identity(row: &mut Row, draft: &RegistrationDraft, role: Role) {
    let display_name = draft.display_name();
    row.insert("role".into(), json!(role.label()));
    row.insert("role_id".into(), json!(role.numeric_id()));
    row.insert("name".into(), json!(display_name));
    row.insert("full_name".into(), json!(display_name));
    row.insert("display_name".into(), json!(display_name));
    row.insert("first_name".into(), json!(draft.first_name.trim()));
    row.insert("last_name".into(), json!(draft.last_name.trim()));
}

/// Metadata bag for the account-creation call.
///
/// Vehicle fields ride along only for roles that require a vehicle, matching
/// the form's submission payload.
pub fn account_metadata(draft: &RegistrationDraft, role: Role, uploads: &UploadResult) -> Row {
    let mut row = Row::new();
    put_identity(&mut row, draft, role);
    put_personal_and_contact(&mut row, draft);
    if role.requires_vehicle() {
        put_vehicle(&mut row, draft);
    }
    put_document_urls(&mut row, uploads);
    row
}

/// Generic `users` row, keyed by the created account id.
pub fn user_row(
    account_id: &str,
    draft: &RegistrationDraft,
    role: Role,
    uploads: &UploadResult,
) -> Row {
    let mut row = Row::new();
    row.insert("id".into(), json!(account_id));
    row.insert("email".into(), json!(draft.email.trim()));
    put_identity(&mut row, draft, role);
    put_personal_and_contact(&mut row, draft);
    put_vehicle(&mut row, draft);
    put_document_urls(&mut row, uploads);
    row
}

/// `staff` row for staff-family roles.
pub fn staff_row(
    account_id: &str,
    draft: &RegistrationDraft,
    role: Role,
    uploads: &UploadResult,
) -> Row {
    let mut row = Row::new();
    row.insert("id".into(), json!(account_id));
    row.insert("email".into(), json!(draft.email.trim()));
    put_identity(&mut row, draft, role);
    put_personal_and_contact(&mut row, draft);
    put_document_urls(&mut row, uploads);
    row
}

/// `drivers` row for driver-family roles.
///
/// Vehicle columns are included only for Driver Mitra with every vehicle
/// field present; company drivers are assigned vehicles elsewhere.
pub fn driver_row(
    account_id: &str,
    draft: &RegistrationDraft,
    role: Role,
    uploads: &UploadResult,
) -> Row {
    let mut row = Row::new();
    row.insert("id".into(), json!(account_id));
    row.insert("email".into(), json!(draft.email.trim()));
    put_identity(&mut row, draft, role);
    put_personal_and_contact(&mut row, draft);
    if role.requires_vehicle() && draft.vehicle_fields_complete() {
        put_vehicle(&mut row, draft);
    }
    put_document_urls(&mut row, uploads);
    row
}
