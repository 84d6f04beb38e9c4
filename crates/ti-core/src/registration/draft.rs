//! The in-progress registration draft.
//!
//! One draft exists per wizard session. It is mutated field-by-field as the
//! user types, holds staged (not yet uploaded) documents, and is reset after
//! a successful submission.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::registration::document::DocumentSlot;
use crate::registration::role::Role;

/// A file the user picked for one document slot.
///
/// Staged in memory only; nothing is uploaded until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Original file name, used to keep the extension on upload.
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl StagedFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// File extension, falling back to `bin` when the name has none.
    pub fn extension(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .unwrap_or("bin")
    }
}

/// All form data of one registration attempt.
///
/// Text fields default to empty strings. Vehicle fields are kept even when
/// the selected role does not require them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub role: Option<Role>,

    // Authentication
    pub email: String,
    pub password: String,

    // Personal information
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub ktp_address: String,
    pub ktp_number: String,
    pub religion: String,
    pub ethnicity: String,
    pub education: String,

    // Contact information
    pub phone_number: String,
    pub family_phone_number: String,
    pub license_number: String,
    pub license_expiry: String,

    // Vehicle information (required only for Driver Mitra)
    pub vehicle_name: String,
    pub vehicle_type: String,
    pub vehicle_brand: String,
    pub license_plate: String,
    pub vehicle_year: String,
    pub vehicle_color: String,
    pub vehicle_status: String,

    // Staged documents, same order as DocumentSlot::ALL
    #[serde(skip)]
    documents: [Option<StagedFile>; 6],
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_index(slot: DocumentSlot) -> usize {
        DocumentSlot::ALL
            .iter()
            .position(|s| *s == slot)
            .expect("slot is in ALL")
    }

    /// Stage a file for a slot, replacing any previously staged file.
    pub fn stage_file(&mut self, slot: DocumentSlot, file: StagedFile) {
        self.documents[Self::slot_index(slot)] = Some(file);
    }

    pub fn staged(&self, slot: DocumentSlot) -> Option<&StagedFile> {
        self.documents[Self::slot_index(slot)].as_ref()
    }

    pub fn staged_count(&self) -> usize {
        self.documents.iter().filter(|d| d.is_some()).count()
    }

    /// True when every vehicle field is non-empty.
    pub fn vehicle_fields_complete(&self) -> bool {
        !self.vehicle_name.trim().is_empty()
            && !self.vehicle_type.trim().is_empty()
            && !self.vehicle_brand.trim().is_empty()
            && !self.license_plate.trim().is_empty()
            && !self.vehicle_year.trim().is_empty()
            && !self.vehicle_color.trim().is_empty()
            && !self.vehicle_status.trim().is_empty()
    }

    /// Display name for the authenticated account.
    ///
    /// Priority: full name, then "first last", then the email.
    pub fn display_name(&self) -> String {
        let full = self.full_name.trim();
        if !full.is_empty() {
            return full.to_string();
        }
        let joined = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let joined = joined.trim();
        if !joined.is_empty() {
            return joined.to_string();
        }
        self.email.trim().to_string()
    }

    /// Return every field and every staged slot to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
