//! Persistence layer over the key-value storage port.
//!
//! # Responsibility
//! - Encode/decode the typed state blobs stored under canonical keys.
//! - Isolate JSON details from service/business orchestration.
//!
//! # Invariants
//! - Malformed persisted JSON fails closed: the reader logs a warning and
//!   returns the empty/default value instead of propagating a parse error.
//! - Writers always persist the full blob; there are no partial writes.

use crate::storage::StorageError;
use log::warn;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod activity_repo;
pub mod lead_repo;
pub mod session_repo;
pub mod settings_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for state blob reads and writes.
#[derive(Debug)]
pub enum RepoError {
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "state encode failed: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Decodes a persisted JSON blob, falling back to `default` on absence or
/// corruption.
fn decode_or<T: DeserializeOwned>(key: &str, raw: Option<String>, default: impl FnOnce() -> T) -> T {
    let Some(raw) = raw else {
        return default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(
                "event=state_decode module=repo status=error key={} error={}",
                key, err
            );
            default()
        }
    }
}
