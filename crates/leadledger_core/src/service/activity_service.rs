//! Activity log use-cases.
//!
//! # Responsibility
//! - Append human-readable events and expose the recent slice for display.
//!
//! # Invariants
//! - Entries are append-only; insertion order is chronological.
//! - The persisted list is trimmed at write time to the configured
//!   capacity, keeping the newest entries.

use crate::repo::activity_repo::{self, ActivityEntry};
use crate::repo::RepoResult;
use crate::storage::StoragePort;
use chrono::Utc;
use log::info;
use uuid::Uuid;

/// Default write-time cap on persisted entries.
pub const DEFAULT_CAPACITY: usize = 200;

/// Default number of entries surfaced for display.
pub const RECENT_DISPLAY_COUNT: usize = 10;

/// Activity log facade over the injected storage port.
pub struct ActivityLog<'s, S: StoragePort> {
    storage: &'s mut S,
    capacity: usize,
}

impl<'s, S: StoragePort> ActivityLog<'s, S> {
    pub fn new(storage: &'s mut S) -> Self {
        Self::with_capacity(storage, DEFAULT_CAPACITY)
    }

    /// Builds a log with a custom write-time cap. A zero capacity is
    /// treated as 1 so `record` always retains the entry it just wrote.
    pub fn with_capacity(storage: &'s mut S, capacity: usize) -> Self {
        Self {
            storage,
            capacity: capacity.max(1),
        }
    }

    /// Appends one entry stamped with the current time, trims to capacity
    /// and persists the full list.
    pub fn record(&mut self, message: impl Into<String>) -> RepoResult<ActivityEntry> {
        let entry = ActivityEntry {
            id: Uuid::new_v4(),
            message: message.into(),
            timestamp: Utc::now(),
        };

        let mut entries = activity_repo::load(self.storage)?;
        entries.push(entry.clone());
        if entries.len() > self.capacity {
            let excess = entries.len() - self.capacity;
            entries.drain(..excess);
        }
        activity_repo::save(self.storage, &entries)?;

        info!(
            "event=activity_recorded module=activity status=ok id={} total={}",
            entry.id,
            entries.len()
        );
        Ok(entry)
    }

    /// Returns up to `count` most recent entries, newest first.
    pub fn recent(&self, count: usize) -> RepoResult<Vec<ActivityEntry>> {
        let entries = activity_repo::load(self.storage)?;
        Ok(entries.into_iter().rev().take(count).collect())
    }

    /// Empties the log and persists the empty list.
    pub fn clear(&mut self) -> RepoResult<()> {
        activity_repo::save(self.storage, &[])?;
        Ok(())
    }
}
