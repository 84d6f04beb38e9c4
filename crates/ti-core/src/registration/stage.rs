//! Wizard stages and the role-derived tab sequence.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::registration::role::Role;

/// One tab of the registration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Personal,
    Contact,
    Vehicle,
    Documents,
}

impl Stage {
    /// The ordered tab sequence for a role.
    ///
    /// Partner drivers get the `vehicle` tab between `contact` and
    /// `documents`; every other role (and the blank form before a role is
    /// chosen) uses the three-stage sequence.
    pub fn sequence_for(role: Option<Role>) -> Vec<Stage> {
        match role {
            Some(role) if role.requires_vehicle() => vec![
                Stage::Personal,
                Stage::Contact,
                Stage::Vehicle,
                Stage::Documents,
            ],
            _ => vec![Stage::Personal, Stage::Contact, Stage::Documents],
        }
    }

    /// Clamp a stage into a (possibly recomputed) sequence.
    ///
    /// Only `vehicle` can drop out of the sequence; in that case the wizard
    /// falls back to `contact` so the user never lands past un-validated
    /// stages. Entered vehicle data is retained by the draft either way.
    pub fn clamp_into(self, sequence: &[Stage]) -> Stage {
        if sequence.contains(&self) {
            self
        } else {
            Stage::Contact
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Personal => write!(f, "personal"),
            Stage::Contact => write!(f, "contact"),
            Stage::Vehicle => write!(f, "vehicle"),
            Stage::Documents => write!(f, "documents"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_mitra_sequence_has_vehicle_between_contact_and_documents() {
        let seq = Stage::sequence_for(Some(Role::DriverMitra));
        assert_eq!(
            seq,
            vec![
                Stage::Personal,
                Stage::Contact,
                Stage::Vehicle,
                Stage::Documents
            ]
        );
    }

    #[test]
    fn other_roles_and_no_role_skip_vehicle() {
        for role in [None, Some(Role::StaffTrips), Some(Role::DriverPerusahaan)] {
            let seq = Stage::sequence_for(role);
            assert_eq!(seq, vec![Stage::Personal, Stage::Contact, Stage::Documents]);
        }
    }

    #[test]
    fn clamp_falls_back_to_contact_when_vehicle_drops_out() {
        let seq = Stage::sequence_for(Some(Role::Customer));
        assert_eq!(Stage::Vehicle.clamp_into(&seq), Stage::Contact);
        assert_eq!(Stage::Documents.clamp_into(&seq), Stage::Documents);
    }
}
