//! Settings blob persistence.

use super::{decode_or, RepoResult};
use crate::model::settings::Settings;
use crate::storage::{keys, StoragePort};

/// Loads persisted settings, or the hardcoded defaults on first run or
/// corrupted state.
pub fn load(storage: &impl StoragePort) -> RepoResult<Settings> {
    let raw = storage.get(keys::SETTINGS)?;
    Ok(decode_or(keys::SETTINGS, raw, Settings::default))
}

/// Overwrites the persisted settings blob wholesale.
pub fn save(storage: &mut impl StoragePort, settings: &Settings) -> RepoResult<()> {
    let encoded = serde_json::to_string(settings)?;
    storage.put(keys::SETTINGS, &encoded)?;
    Ok(())
}
