//! Lead store: reconciliation, status workflow and filtering.
//!
//! # Responsibility
//! - Merge remote lead data with locally persisted workflow state.
//! - Enforce the status-update contract (status + remark + counselor).
//! - Provide pure, order-preserving list filtering.
//!
//! # Invariants
//! - `reconcile` is pure and idempotent for identical inputs.
//! - A rejected status update leaves persisted state untouched.
//! - Every successful reconcile/update persists the full merged list.

use crate::model::lead::{Lead, LeadId, LeadStatus, RawLead, Remark};
use crate::repo::{lead_repo, RepoError};
use crate::source::{LeadSource, SourceError};
use crate::storage::StoragePort;
use chrono::{DateTime, Utc};
use log::info;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LeadServiceResult<T> = Result<T, LeadServiceError>;

/// Rejected-operation detail for a status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusValidationError {
    /// Remark text was empty or whitespace-only after trimming.
    EmptyRemark,
    /// No acting counselor was supplied.
    EmptyCounselor,
}

impl Display for StatusValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRemark => write!(f, "remark text must not be empty"),
            Self::EmptyCounselor => write!(f, "an acting counselor is required"),
        }
    }
}

impl Error for StatusValidationError {}

/// Service error for lead use-cases.
#[derive(Debug)]
pub enum LeadServiceError {
    /// Status update rejected; no state was changed.
    Validation(StatusValidationError),
    /// Target lead does not exist in the merged list.
    NotFound(LeadId),
    /// Remote fetch failure; the store keeps its previous state.
    Source(SourceError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for LeadServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "lead not found: {id}"),
            Self::Source(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LeadServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Source(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for LeadServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<SourceError> for LeadServiceError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

impl From<StatusValidationError> for LeadServiceError {
    fn from(value: StatusValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Request model for recording a status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub lead_id: LeadId,
    pub status: LeadStatus,
    pub remark: String,
    pub counselor: String,
}

/// Attaches locally persisted workflow state to freshly fetched remote leads.
///
/// Remote fields always come from `raw`; local overlay fields (status,
/// counselor, remarks, last-updated) come from the matching entry in
/// `existing`, keyed by lead id, and default to New / none / empty /
/// creation time when absent.
///
/// Pure function: identical inputs always produce the identical merged list,
/// in remote order.
pub fn reconcile(raw: &[RawLead], existing: &[Lead]) -> Vec<Lead> {
    let overrides: HashMap<&str, &Lead> =
        existing.iter().map(|lead| (lead.id.as_str(), lead)).collect();

    raw.iter()
        .map(|record| match overrides.get(record.id.as_str()) {
            Some(prev) => Lead {
                id: record.id.clone(),
                name: record.name.clone(),
                email: record.email.clone(),
                phone: record.phone.clone(),
                course: record.course.clone(),
                created_at: record.created_at,
                status: prev.status,
                counselor: prev.counselor.clone(),
                remarks: prev.remarks.clone(),
                last_updated: prev.last_updated,
            },
            None => Lead::from_raw(record.clone()),
        })
        .collect()
}

/// Predicate set for `filter_leads`. Empty/unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    /// Case-insensitive substring match over name, email and phone.
    pub search: String,
    pub statuses: Vec<LeadStatus>,
    /// Inclusive creation-date range bounds.
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub counselors: Vec<String>,
    pub courses: Vec<String>,
}

impl LeadFilter {
    fn matches(&self, lead: &Lead) -> bool {
        if !self.search.trim().is_empty() {
            let needle = self.search.trim().to_lowercase();
            let hit = lead.name.to_lowercase().contains(&needle)
                || lead.email.to_lowercase().contains(&needle)
                || lead.phone.contains(needle.as_str());
            if !hit {
                return false;
            }
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&lead.status) {
            return false;
        }

        if let Some(from) = self.from {
            if lead.created_at < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if lead.created_at > to {
                return false;
            }
        }

        if !self.counselors.is_empty() {
            match lead.counselor.as_deref() {
                Some(id) if self.counselors.iter().any(|c| c == id) => {}
                _ => return false,
            }
        }

        if !self.courses.is_empty() && !self.courses.iter().any(|c| c == &lead.course) {
            return false;
        }

        true
    }
}

/// Applies the filter to a lead list, preserving relative order.
///
/// A fully-unset filter is the identity.
pub fn filter_leads(leads: &[Lead], filter: &LeadFilter) -> Vec<Lead> {
    leads
        .iter()
        .filter(|lead| filter.matches(lead))
        .cloned()
        .collect()
}

/// Lead store facade over the injected storage port.
pub struct LeadService<'s, S: StoragePort> {
    storage: &'s mut S,
}

impl<'s, S: StoragePort> LeadService<'s, S> {
    pub fn new(storage: &'s mut S) -> Self {
        Self { storage }
    }

    /// Fetches remote leads, reconciles them with persisted local state and
    /// persists the merged list.
    ///
    /// A failed fetch returns the source error and leaves the persisted
    /// state at its previous value.
    pub fn refresh(&mut self, source: &impl LeadSource) -> LeadServiceResult<Vec<Lead>> {
        let existing = lead_repo::load(self.storage)?;
        let raw = source.fetch_leads()?;
        let merged = reconcile(&raw, &existing);
        lead_repo::save(self.storage, &merged)?;
        info!(
            "event=leads_refresh module=lead status=ok remote={} merged={}",
            raw.len(),
            merged.len()
        );
        Ok(merged)
    }

    /// Returns the persisted merged lead list.
    pub fn leads(&self) -> LeadServiceResult<Vec<Lead>> {
        Ok(lead_repo::load(self.storage)?)
    }

    /// Returns one lead by id, if present.
    pub fn get(&self, lead_id: &str) -> LeadServiceResult<Option<Lead>> {
        let leads = lead_repo::load(self.storage)?;
        Ok(leads.into_iter().find(|lead| lead.id == lead_id))
    }

    /// Records a status transition on one lead.
    ///
    /// # Contract
    /// - Requires a non-empty trimmed remark and an acting counselor;
    ///   violations surface as `LeadServiceError::Validation` with no state
    ///   change.
    /// - On success: appends one timeline entry, sets `status`, `counselor`
    ///   and `last_updated` to the call time, persists the full list and
    ///   returns the updated lead. No other lead is touched.
    pub fn update_status(&mut self, update: &StatusUpdate) -> LeadServiceResult<Lead> {
        let remark = update.remark.trim();
        if remark.is_empty() {
            return Err(StatusValidationError::EmptyRemark.into());
        }
        let counselor = update.counselor.trim();
        if counselor.is_empty() {
            return Err(StatusValidationError::EmptyCounselor.into());
        }

        let mut leads = lead_repo::load(self.storage)?;
        let target = leads
            .iter_mut()
            .find(|lead| lead.id == update.lead_id)
            .ok_or_else(|| LeadServiceError::NotFound(update.lead_id.clone()))?;

        let now = Utc::now();
        target.remarks.push(Remark {
            status: update.status,
            remark: remark.to_string(),
            timestamp: now,
            counselor: counselor.to_string(),
        });
        target.status = update.status;
        target.counselor = Some(counselor.to_string());
        target.last_updated = now;
        let updated = target.clone();

        lead_repo::save(self.storage, &leads)?;
        info!(
            "event=lead_status_update module=lead status=ok lead_id={} new_status={}",
            updated.id, updated.status
        );
        Ok(updated)
    }
}
