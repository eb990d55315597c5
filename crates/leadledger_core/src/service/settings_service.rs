//! Settings use-cases and message-template rendering.
//!
//! # Responsibility
//! - Load/save the settings blob and perform the destructive full wipe.
//! - Render outbound message templates against a lead.
//!
//! # Invariants
//! - `save` overwrites the blob wholesale; there is no partial merge.
//! - `clear_all` wipes every persisted key; confirmation is the caller's
//!   concern.
//! - Template rendering substitutes only known placeholders; unknown
//!   placeholders are left intact.

use crate::model::lead::Lead;
use crate::model::settings::Settings;
use crate::repo::{settings_repo, RepoResult};
use crate::storage::{StoragePort, StorageResult};
use chrono::{DateTime, Utc};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(name|course|date)\}").expect("valid placeholder regex"));

const TEMPLATE_DATE_FORMAT: &str = "%b %d, %Y %H:%M";

/// Settings facade over the injected storage port.
pub struct SettingsService<'s, S: StoragePort> {
    storage: &'s mut S,
}

impl<'s, S: StoragePort> SettingsService<'s, S> {
    pub fn new(storage: &'s mut S) -> Self {
        Self { storage }
    }

    /// Returns persisted settings, or the defaults on first run.
    pub fn load(&self) -> RepoResult<Settings> {
        settings_repo::load(self.storage)
    }

    /// Overwrites the persisted settings blob wholesale.
    pub fn save(&mut self, settings: &Settings) -> RepoResult<()> {
        settings_repo::save(self.storage, settings)?;
        info!("event=settings_saved module=settings status=ok");
        Ok(())
    }

    /// Wipes all persisted state: leads, activities, settings, session.
    ///
    /// Destructive and irreversible; the caller gates this behind its own
    /// confirmation flow.
    pub fn clear_all(&mut self) -> StorageResult<()> {
        self.storage.clear()?;
        warn!("event=clear_all module=settings status=ok");
        Ok(())
    }
}

/// Substitutes `{name}`, `{course}` and `{date}` placeholders in a message
/// template for the given lead.
///
/// `{date}` is only substituted when a date is supplied (demo templates);
/// otherwise it is left intact for the caller to fill in later.
pub fn render_message(template: &str, lead: &Lead, date: Option<DateTime<Utc>>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
            "name" => lead.name.clone(),
            "course" => lead.course.clone(),
            "date" => date.map_or_else(
                || caps[0].to_string(),
                |d| d.format(TEMPLATE_DATE_FORMAT).to_string(),
            ),
            _ => caps[0].to_string(),
        })
        .into_owned()
}
