//! Activity log persistence and entry read model.

use super::{decode_or, RepoResult};
use crate::storage::{keys, StoragePort};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded activity event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Locally-unique entry id.
    pub id: Uuid,
    /// Human-readable event description.
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Loads persisted activity entries in insertion (chronological) order.
pub fn load(storage: &impl StoragePort) -> RepoResult<Vec<ActivityEntry>> {
    let raw = storage.get(keys::ACTIVITIES)?;
    Ok(decode_or(keys::ACTIVITIES, raw, Vec::new))
}

/// Persists the full activity list.
pub fn save(storage: &mut impl StoragePort, entries: &[ActivityEntry]) -> RepoResult<()> {
    let encoded = serde_json::to_string(entries)?;
    storage.put(keys::ACTIVITIES, &encoded)?;
    Ok(())
}
