//! Session and credential verification use-cases.
//!
//! # Responsibility
//! - Verify credentials through a pluggable interface and manage the
//!   persisted session record.
//!
//! # Invariants
//! - Only sanitized profiles are persisted; credential material never
//!   reaches storage.
//! - A failed login performs no writes.
//!
//! The static verifier reproduces the dashboard's single hardcoded admin
//! account. This is observable behavior, not a security boundary; anything
//! productized must swap in a real verifier behind the same trait.

use crate::model::user::UserProfile;
use crate::repo::{session_repo, RepoResult};
use crate::storage::StoragePort;
use log::info;

/// Pluggable credential check. Returns the sanitized profile on success.
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> Option<UserProfile>;
}

/// Single hardcoded admin credential pair.
pub struct StaticCredentialVerifier {
    username: &'static str,
    password: &'static str,
}

impl Default for StaticCredentialVerifier {
    fn default() -> Self {
        Self {
            username: "admin",
            password: "admin123",
        }
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> Option<UserProfile> {
        if username == self.username && password == self.password {
            Some(UserProfile {
                id: 1,
                username: self.username.to_string(),
                role: "admin".to_string(),
                name: "Adarsh".to_string(),
            })
        } else {
            None
        }
    }
}

/// Session facade over the injected storage port.
pub struct Session<'s, S: StoragePort> {
    storage: &'s mut S,
}

impl<'s, S: StoragePort> Session<'s, S> {
    pub fn new(storage: &'s mut S) -> Self {
        Self { storage }
    }

    /// Attempts a login; on success persists the sanitized profile and
    /// returns `true`, otherwise returns `false` with no side effects.
    pub fn login(
        &mut self,
        verifier: &impl CredentialVerifier,
        username: &str,
        password: &str,
    ) -> RepoResult<bool> {
        match verifier.verify(username, password) {
            Some(profile) => {
                session_repo::save(self.storage, &profile)?;
                info!(
                    "event=login module=auth status=ok username={}",
                    profile.username
                );
                Ok(true)
            }
            None => {
                info!("event=login module=auth status=rejected");
                Ok(false)
            }
        }
    }

    /// Clears the persisted session record. Idempotent.
    pub fn logout(&mut self) -> RepoResult<()> {
        session_repo::clear(self.storage)?;
        info!("event=logout module=auth status=ok");
        Ok(())
    }

    /// Whether a persisted session record exists.
    pub fn is_authenticated(&self) -> RepoResult<bool> {
        Ok(session_repo::load(self.storage)?.is_some())
    }

    /// Returns the persisted session user, if any.
    pub fn current_user(&self) -> RepoResult<Option<UserProfile>> {
        session_repo::load(self.storage)
    }
}
