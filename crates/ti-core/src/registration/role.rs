//! Platform roles and the shared role lookup table.
//!
//! Every role the registration form offers maps to exactly one table entry
//! carrying its display label, the numeric id the backing tables expect, and
//! its profile family. The wizard and the submission pipeline both read this
//! table, so the id mapping and the family membership cannot drift apart.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::registration::error::RegistrationError;

/// A registrable platform role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    StaffAdmin,
    Admin,
    StaffTrips,
    StaffTraffic,
    DriverPerusahaan,
    DriverMitra,
    Dispatcher,
    Agent,
    Customer,
}

/// Which profile table (beyond `users`) a role writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleFamily {
    Staff,
    Driver,
    General,
}

struct RoleEntry {
    role: Role,
    label: &'static str,
    id: u32,
    family: RoleFamily,
}

/// One row per role. `Staff Admin` has no id in the legacy mapping and takes
/// the unused 4 instead of silently falling back to the Customer id.
const ROLE_TABLE: &[RoleEntry] = &[
    RoleEntry {
        role: Role::Admin,
        label: "Admin",
        id: 1,
        family: RoleFamily::Staff,
    },
    RoleEntry {
        role: Role::DriverMitra,
        label: "Driver Mitra",
        id: 2,
        family: RoleFamily::Driver,
    },
    RoleEntry {
        role: Role::DriverPerusahaan,
        label: "Driver Perusahaan",
        id: 3,
        family: RoleFamily::Driver,
    },
    RoleEntry {
        role: Role::StaffAdmin,
        label: "Staff Admin",
        id: 4,
        family: RoleFamily::Staff,
    },
    RoleEntry {
        role: Role::StaffTraffic,
        label: "Staff Traffic",
        id: 5,
        family: RoleFamily::Staff,
    },
    RoleEntry {
        role: Role::StaffTrips,
        label: "Staff Trips",
        id: 7,
        family: RoleFamily::Staff,
    },
    RoleEntry {
        role: Role::Dispatcher,
        label: "Dispatcher",
        id: 8,
        family: RoleFamily::Staff,
    },
    RoleEntry {
        role: Role::Customer,
        label: "Customer",
        id: 10,
        family: RoleFamily::General,
    },
    RoleEntry {
        role: Role::Agent,
        label: "Agent",
        id: 11,
        family: RoleFamily::General,
    },
];

impl Role {
    fn entry(&self) -> &'static RoleEntry {
        ROLE_TABLE
            .iter()
            .find(|entry| entry.role == *self)
            .expect("every Role variant has a table entry")
    }

    /// Parse the display label used by the form and the backend metadata.
    ///
    /// Unknown labels are an error, not a Customer fallback.
    pub fn from_label(label: &str) -> Result<Self, RegistrationError> {
        ROLE_TABLE
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.role)
            .ok_or_else(|| RegistrationError::UnknownRole {
                label: label.to_string(),
            })
    }

    /// The display label, also used verbatim in account metadata.
    pub fn label(&self) -> &'static str {
        self.entry().label
    }

    /// The numeric id the backing tables key role membership on.
    pub fn numeric_id(&self) -> u32 {
        self.entry().id
    }

    pub fn family(&self) -> RoleFamily {
        self.entry().family
    }

    /// Vehicle fields are mandatory only for partner drivers.
    pub fn requires_vehicle(&self) -> bool {
        *self == Role::DriverMitra
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_label_round_trips_every_table_entry() {
        for entry in ROLE_TABLE {
            assert_eq!(Role::from_label(entry.label).unwrap(), entry.role);
        }
    }

    #[test]
    fn from_label_rejects_unknown_labels() {
        let err = Role::from_label("Supervisor").unwrap_err();
        assert!(matches!(err, RegistrationError::UnknownRole { .. }));
    }

    #[test]
    fn numeric_ids_match_the_legacy_mapping() {
        assert_eq!(Role::Admin.numeric_id(), 1);
        assert_eq!(Role::DriverMitra.numeric_id(), 2);
        assert_eq!(Role::DriverPerusahaan.numeric_id(), 3);
        assert_eq!(Role::StaffTraffic.numeric_id(), 5);
        assert_eq!(Role::StaffTrips.numeric_id(), 7);
        assert_eq!(Role::Dispatcher.numeric_id(), 8);
        assert_eq!(Role::Customer.numeric_id(), 10);
        assert_eq!(Role::Agent.numeric_id(), 11);
    }

    #[test]
    fn only_driver_mitra_requires_vehicle_fields() {
        for entry in ROLE_TABLE {
            assert_eq!(
                entry.role.requires_vehicle(),
                entry.role == Role::DriverMitra
            );
        }
    }

    #[test]
    fn families_split_staff_and_driver_roles() {
        assert_eq!(Role::StaffTrips.family(), RoleFamily::Staff);
        assert_eq!(Role::Dispatcher.family(), RoleFamily::Staff);
        assert_eq!(Role::DriverMitra.family(), RoleFamily::Driver);
        assert_eq!(Role::DriverPerusahaan.family(), RoleFamily::Driver);
        assert_eq!(Role::Agent.family(), RoleFamily::General);
        assert_eq!(Role::Customer.family(), RoleFamily::General);
    }
}
