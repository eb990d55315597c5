//! Merged lead list persistence.
//!
//! # Invariants
//! - The full merged list is written on every save; this is the only
//!   durability mechanism for local lead state.

use super::{decode_or, RepoResult};
use crate::model::lead::Lead;
use crate::storage::{keys, StoragePort};

/// Loads the persisted merged lead list, or an empty list on first run or
/// corrupted state.
pub fn load(storage: &impl StoragePort) -> RepoResult<Vec<Lead>> {
    let raw = storage.get(keys::LEADS)?;
    Ok(decode_or(keys::LEADS, raw, Vec::new))
}

/// Persists the full merged lead list.
pub fn save(storage: &mut impl StoragePort, leads: &[Lead]) -> RepoResult<()> {
    let encoded = serde_json::to_string(leads)?;
    storage.put(keys::LEADS, &encoded)?;
    Ok(())
}
