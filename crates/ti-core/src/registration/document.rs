//! Document upload slots.
//!
//! Each slot maps to a sub-folder of the documents bucket and to the url
//! column the profile rows and account metadata use.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Storage bucket holding every uploaded registration document.
pub const DOCUMENT_BUCKET: &str = "user-documents";

/// A named document-upload field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentSlot {
    SelfiePhoto,
    FamilyCard,
    KtpDocument,
    SimDocument,
    SkckDocument,
    VehiclePhoto,
}

impl DocumentSlot {
    /// Upload order is fixed so error attribution stays deterministic.
    pub const ALL: [DocumentSlot; 6] = [
        DocumentSlot::SelfiePhoto,
        DocumentSlot::FamilyCard,
        DocumentSlot::KtpDocument,
        DocumentSlot::SimDocument,
        DocumentSlot::SkckDocument,
        DocumentSlot::VehiclePhoto,
    ];

    /// Sub-folder of [`DOCUMENT_BUCKET`] the slot uploads into.
    pub fn folder(&self) -> &'static str {
        match self {
            DocumentSlot::SelfiePhoto => "selfies",
            DocumentSlot::FamilyCard => "family-cards",
            DocumentSlot::KtpDocument => "ktp",
            DocumentSlot::SimDocument => "sim",
            DocumentSlot::SkckDocument => "skck",
            DocumentSlot::VehiclePhoto => "vehicles",
        }
    }

    /// Column / metadata key carrying the slot's public url.
    pub fn url_key(&self) -> &'static str {
        match self {
            DocumentSlot::SelfiePhoto => "selfie_photo_url",
            DocumentSlot::FamilyCard => "family_card_url",
            DocumentSlot::KtpDocument => "ktp_url",
            DocumentSlot::SimDocument => "sim_url",
            DocumentSlot::SkckDocument => "skck_url",
            DocumentSlot::VehiclePhoto => "vehicle_photo_url",
        }
    }
}

impl Display for DocumentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSlot::SelfiePhoto => write!(f, "selfie photo"),
            DocumentSlot::FamilyCard => write!(f, "family card"),
            DocumentSlot::KtpDocument => write!(f, "KTP document"),
            DocumentSlot::SimDocument => write!(f, "SIM document"),
            DocumentSlot::SkckDocument => write!(f, "SKCK document"),
            DocumentSlot::VehiclePhoto => write!(f, "vehicle photo"),
        }
    }
}

/// Public urls produced by the upload pass, one entry per slot.
///
/// Slots that were never staged stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadResult {
    urls: [Option<String>; 6],
}

impl UploadResult {
    fn index(slot: DocumentSlot) -> usize {
        DocumentSlot::ALL
            .iter()
            .position(|s| *s == slot)
            .expect("slot is in ALL")
    }

    pub fn set(&mut self, slot: DocumentSlot, url: String) {
        self.urls[Self::index(slot)] = Some(url);
    }

    pub fn url(&self, slot: DocumentSlot) -> Option<&str> {
        self.urls[Self::index(slot)].as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.iter().all(Option::is_none)
    }

    /// Iterate `(slot, url)` pairs for the slots that were uploaded.
    pub fn iter(&self) -> impl Iterator<Item = (DocumentSlot, &str)> + '_ {
        DocumentSlot::ALL
            .into_iter()
            .zip(self.urls.iter())
            .filter_map(|(slot, url)| url.as_deref().map(|u| (slot, u)))
    }
}
