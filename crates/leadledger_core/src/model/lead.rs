//! Lead domain model and status workflow.
//!
//! # Responsibility
//! - Define `RawLead` (remote fields only) and `Lead` (remote + local overlay).
//! - Define the fixed `LeadStatus` enumeration with stable wire strings.
//!
//! # Invariants
//! - `id` is remote-assigned and never changes for the lifetime of a lead.
//! - `remarks` is append-only; entries are never edited or reordered.
//! - A lead with no local overlay carries `status = New`, empty remarks and
//!   `last_updated == created_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable remote-assigned lead identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures; the
/// remote registration API issues opaque string ids.
pub type LeadId = String;

/// Fixed sales-workflow status enumeration.
///
/// Wire strings match the display strings the dashboard has always persisted,
/// so existing stored state decodes unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    #[serde(rename = "Follow Up")]
    FollowUp,
    #[serde(rename = "RNR")]
    Rnr,
    #[serde(rename = "Not Interested")]
    NotInterested,
    Walking,
    #[serde(rename = "Demo Scheduled")]
    DemoScheduled,
    #[serde(rename = "Demo Completed")]
    DemoCompleted,
    Converted,
}

impl LeadStatus {
    /// All statuses in workflow order.
    pub const ALL: [LeadStatus; 8] = [
        Self::New,
        Self::FollowUp,
        Self::Rnr,
        Self::NotInterested,
        Self::Walking,
        Self::DemoScheduled,
        Self::DemoCompleted,
        Self::Converted,
    ];

    /// Returns the stable wire/display string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::FollowUp => "Follow Up",
            Self::Rnr => "RNR",
            Self::NotInterested => "Not Interested",
            Self::Walking => "Walking",
            Self::DemoScheduled => "Demo Scheduled",
            Self::DemoCompleted => "Demo Completed",
            Self::Converted => "Converted",
        }
    }

    /// Parses a wire/display string back into a status.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lead record as delivered by the remote registration API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLead {
    /// Remote-assigned stable identifier.
    #[serde(rename = "_id")]
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub created_at: DateTime<Utc>,
}

/// One timeline entry recorded alongside a status transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remark {
    /// Status the lead was moved to when this entry was recorded.
    pub status: LeadStatus,
    /// Trimmed free-text note.
    pub remark: String,
    pub timestamp: DateTime<Utc>,
    /// Acting counselor identifier.
    pub counselor: String,
}

/// Merged lead record: remote fields plus locally-attached workflow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub created_at: DateTime<Utc>,
    pub status: LeadStatus,
    /// Assigned counselor id, or the reserved super-admin sentinel.
    #[serde(default)]
    pub counselor: Option<String>,
    #[serde(default)]
    pub remarks: Vec<Remark>,
    pub last_updated: DateTime<Utc>,
}

impl Lead {
    /// Builds a lead from remote fields with the default local overlay.
    pub fn from_raw(raw: RawLead) -> Self {
        let last_updated = raw.created_at;
        Self {
            id: raw.id,
            name: raw.name,
            email: raw.email,
            phone: raw.phone,
            course: raw.course,
            created_at: raw.created_at,
            status: LeadStatus::New,
            counselor: None,
            remarks: Vec::new(),
            last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LeadStatus;

    #[test]
    fn status_strings_roundtrip() {
        for status in LeadStatus::ALL {
            assert_eq!(LeadStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_rejects_unknown_status() {
        assert_eq!(LeadStatus::parse("Archived"), None);
        assert_eq!(LeadStatus::parse("new"), None);
    }

    #[test]
    fn status_serializes_as_display_string() {
        let json = serde_json::to_string(&LeadStatus::DemoScheduled).unwrap();
        assert_eq!(json, "\"Demo Scheduled\"");
    }
}
