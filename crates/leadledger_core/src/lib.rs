//! Core domain logic for LeadLedger.
//!
//! This crate is the single source of truth for the lead-management model:
//! reconciliation of remote lead data with locally persisted workflow state,
//! the status-update contract, activity logging, session handling and
//! settings. Presentation layers consume these contracts; nothing here
//! renders anything.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod source;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::counselor::{Counselor, COUNSELORS, SUPER_ADMIN_ID};
pub use model::lead::{Lead, LeadId, LeadStatus, RawLead, Remark};
pub use model::settings::Settings;
pub use model::user::UserProfile;
pub use repo::activity_repo::ActivityEntry;
pub use service::activity_service::ActivityLog;
pub use service::auth_service::{CredentialVerifier, Session, StaticCredentialVerifier};
pub use service::lead_service::{
    filter_leads, reconcile, LeadFilter, LeadService, LeadServiceError, StatusUpdate,
    StatusValidationError,
};
pub use service::settings_service::{render_message, SettingsService};
pub use source::{HttpLeadSource, LeadSource, SourceError};
pub use storage::{MemoryStorage, SqliteStorage, StorageError, StoragePort};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
