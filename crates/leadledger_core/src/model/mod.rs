//! Domain model for the lead-management core.
//!
//! # Responsibility
//! - Define the canonical data structures shared by store and service code.
//! - Keep persisted field names byte-compatible with the existing storage
//!   layout (camelCase keys, `_id` lead identifier).
//!
//! # Invariants
//! - A lead's identifier originates from the remote source and is stable.
//! - Remark sequences are append-only; insertion order is chronological.

pub mod counselor;
pub mod lead;
pub mod settings;
pub mod user;
