//! Session user record persistence.
//!
//! # Invariants
//! - A corrupted record fails closed to "no session".

use super::{decode_or, RepoResult};
use crate::model::user::UserProfile;
use crate::storage::{keys, StoragePort};

/// Loads the persisted session user, if one exists.
pub fn load(storage: &impl StoragePort) -> RepoResult<Option<UserProfile>> {
    let raw = storage.get(keys::CURRENT_USER)?;
    Ok(decode_or(keys::CURRENT_USER, raw, || None))
}

/// Persists the sanitized session user record.
pub fn save(storage: &mut impl StoragePort, user: &UserProfile) -> RepoResult<()> {
    let encoded = serde_json::to_string(user)?;
    storage.put(keys::CURRENT_USER, &encoded)?;
    Ok(())
}

/// Removes the session user record.
pub fn clear(storage: &mut impl StoragePort) -> RepoResult<()> {
    storage.remove(keys::CURRENT_USER)?;
    Ok(())
}
