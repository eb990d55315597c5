//! Authenticated user identity.
//!
//! # Responsibility
//! - Define the sanitized session record persisted after login.
//!
//! # Invariants
//! - The profile carries no credential material by construction; there is
//!   no password field to strip.

use serde::{Deserialize, Serialize};

/// Sanitized authenticated identity persisted for the session lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u32,
    pub username: String,
    pub role: String,
    pub name: String,
}
