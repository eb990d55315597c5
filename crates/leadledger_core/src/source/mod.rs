//! Remote lead source contract and HTTP implementation.
//!
//! # Responsibility
//! - Define the fetch contract the lead store depends on.
//! - Decode the registration API's JSON envelope into `RawLead` records.
//!
//! # Invariants
//! - A failed fetch performs no writes; the caller's state is untouched.
//! - There is no retry, timeout, or cancellation logic; the caller blocks
//!   until the response arrives or the request fails.

use crate::model::lead::RawLead;
use log::error;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default registration endpoint.
pub const DEFAULT_LEADS_URL: &str = "https://api.be-practical.com/course/register/list";

pub type SourceResult<T> = Result<T, SourceError>;

/// Fetch-layer error.
#[derive(Debug)]
pub enum SourceError {
    /// Transport or HTTP-status failure.
    Http(reqwest::Error),
    /// Response body did not match the expected envelope.
    Decode(serde_json::Error),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(err) => write!(f, "lead fetch failed: {err}"),
            Self::Decode(err) => write!(f, "lead envelope decode failed: {err}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

/// JSON envelope returned by the registration API.
#[derive(Debug, Deserialize)]
pub struct LeadEnvelope {
    pub data: Vec<RawLead>,
}

/// Contract for fetching the current remote lead list.
pub trait LeadSource {
    fn fetch_leads(&self) -> SourceResult<Vec<RawLead>>;
}

/// Blocking HTTP lead source against a configured endpoint.
pub struct HttpLeadSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpLeadSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpLeadSource {
    fn default() -> Self {
        Self::new(DEFAULT_LEADS_URL)
    }
}

impl LeadSource for HttpLeadSource {
    fn fetch_leads(&self) -> SourceResult<Vec<RawLead>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|err| {
                error!(
                    "event=leads_fetch module=source status=error url={} error={}",
                    self.url, err
                );
                SourceError::from(err)
            })?;

        let body = response.text()?;
        let envelope: LeadEnvelope = serde_json::from_str(&body).map_err(|err| {
            error!(
                "event=leads_fetch module=source status=error url={} error_code=bad_envelope error={}",
                self.url, err
            );
            SourceError::Decode(err)
        })?;

        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::LeadEnvelope;

    #[test]
    fn envelope_decodes_remote_field_names() {
        let body = r#"{
            "data": [{
                "_id": "L1",
                "name": "Asha Rao",
                "email": "asha@example.com",
                "phone": "9900112233",
                "course": "Full Stack",
                "createdAt": "2026-08-01T09:30:00Z"
            }]
        }"#;

        let envelope: LeadEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].id, "L1");
        assert_eq!(envelope.data[0].course, "Full Stack");
    }

    #[test]
    fn envelope_rejects_missing_data_field() {
        let err = serde_json::from_str::<LeadEnvelope>("{\"items\": []}");
        assert!(err.is_err());
    }
}
