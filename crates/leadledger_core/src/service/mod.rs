//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repo calls into use-case level APIs.
//! - Keep callers decoupled from storage-key and JSON details.
//!
//! # Invariants
//! - Services never bypass repo persistence contracts.
//! - Every failure degrades to "state unchanged"; nothing here is fatal.

pub mod activity_service;
pub mod auth_service;
pub mod lead_service;
pub mod report_service;
pub mod settings_service;
