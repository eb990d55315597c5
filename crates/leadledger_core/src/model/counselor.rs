//! Static counselor reference data.
//!
//! # Responsibility
//! - Provide the fixed counselor roster and the reserved super-admin sentinel.
//!
//! # Invariants
//! - The roster is compile-time static; it is never persisted or mutated.

/// Reserved counselor sentinel representing the administrative role.
pub const SUPER_ADMIN_ID: &str = "superadmin";

/// Display name shown for the super-admin sentinel.
pub const SUPER_ADMIN_NAME: &str = "Super Admin";

/// Staff identity that can be assigned to and record updates on a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counselor {
    pub id: &'static str,
    pub name: &'static str,
}

/// Fixed counselor roster.
pub const COUNSELORS: [Counselor; 2] = [
    Counselor {
        id: "counselor1",
        name: "Roopa",
    },
    Counselor {
        id: "counselor2",
        name: "Shwetha",
    },
];

/// Resolves a counselor id to its display name.
///
/// Returns `None` for unknown ids so callers can render a placeholder.
pub fn display_name(counselor_id: &str) -> Option<&'static str> {
    if counselor_id == SUPER_ADMIN_ID {
        return Some(SUPER_ADMIN_NAME);
    }
    COUNSELORS
        .iter()
        .find(|c| c.id == counselor_id)
        .map(|c| c.name)
}

/// Returns whether the id names a real counselor or the admin sentinel.
pub fn is_known(counselor_id: &str) -> bool {
    display_name(counselor_id).is_some()
}

#[cfg(test)]
mod tests {
    use super::{display_name, is_known, SUPER_ADMIN_ID};

    #[test]
    fn roster_lookup_resolves_names() {
        assert_eq!(display_name("counselor1"), Some("Roopa"));
        assert_eq!(display_name("counselor2"), Some("Shwetha"));
        assert_eq!(display_name(SUPER_ADMIN_ID), Some("Super Admin"));
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(display_name("counselor9"), None);
        assert!(!is_known(""));
    }
}
