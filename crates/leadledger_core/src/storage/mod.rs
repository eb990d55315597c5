//! Key-value storage port and implementations.
//!
//! # Responsibility
//! - Define the storage contract every persisting component depends on.
//! - Keep persistence details (SQLite, in-memory map) behind one trait so
//!   reconciliation and workflow logic stay testable without real storage.
//!
//! # Invariants
//! - Values are opaque UTF-8 strings; JSON encoding is the caller's concern.
//! - Writes are last-writer-wins; there is no cross-process coordination.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Canonical storage key layout.
///
/// The merged leads list is the single source of truth for local lead state;
/// the legacy per-lead key pattern is intentionally not supported.
pub mod keys {
    /// Merged lead records.
    pub const LEADS: &str = "leads";
    /// Activity log entries.
    pub const ACTIVITIES: &str = "activities";
    /// Settings blob.
    pub const SETTINGS: &str = "leadManagerSettings";
    /// Current session user record.
    pub const CURRENT_USER: &str = "currentUser";
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage transport error.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Injected durable key-value storage contract.
pub trait StoragePort {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Writes `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> StorageResult<()>;
    /// Removes the value stored under `key`. Missing keys are a no-op.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
    /// Wipes every stored key unconditionally.
    fn clear(&mut self) -> StorageResult<()>;
}
