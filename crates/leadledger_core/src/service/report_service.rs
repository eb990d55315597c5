//! Dashboard reporting aggregates.
//!
//! # Responsibility
//! - Aggregate an in-memory lead list into the series the dashboard charts
//!   consume. Rendering stays with the presentation layer.
//!
//! # Invariants
//! - All functions are pure; the input list is never mutated.
//! - Day-keyed series are sorted ascending by date.

use crate::model::lead::{Lead, LeadStatus};
use chrono::{NaiveDate, Timelike};
use std::collections::BTreeMap;

/// Per-day lead volume with conversion-relevant breakdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyLeadTotals {
    pub date: NaiveDate,
    pub total: usize,
    pub converted: usize,
    pub walking: usize,
}

/// Counts leads per status, in workflow order. Zero counts are included so
/// chart axes stay stable.
pub fn status_counts(leads: &[Lead]) -> Vec<(LeadStatus, usize)> {
    LeadStatus::ALL
        .iter()
        .map(|&status| {
            let count = leads.iter().filter(|lead| lead.status == status).count();
            (status, count)
        })
        .collect()
}

/// Groups leads by creation day with converted/walking breakdowns.
pub fn daily_totals(leads: &[Lead]) -> Vec<DailyLeadTotals> {
    let mut by_day: BTreeMap<NaiveDate, DailyLeadTotals> = BTreeMap::new();

    for lead in leads {
        let date = lead.created_at.date_naive();
        let entry = by_day.entry(date).or_insert(DailyLeadTotals {
            date,
            total: 0,
            converted: 0,
            walking: 0,
        });
        entry.total += 1;
        match lead.status {
            LeadStatus::Converted => entry.converted += 1,
            LeadStatus::Walking => entry.walking += 1,
            _ => {}
        }
    }

    by_day.into_values().collect()
}

/// Per-day conversion rate as a percentage.
pub fn conversion_trend(leads: &[Lead]) -> Vec<(NaiveDate, f64)> {
    daily_totals(leads)
        .into_iter()
        .map(|day| {
            let rate = if day.total == 0 {
                0.0
            } else {
                day.converted as f64 / day.total as f64 * 100.0
            };
            (day.date, rate)
        })
        .collect()
}

/// Lead arrival counts per hour of day (24 buckets, UTC).
pub fn hourly_distribution(leads: &[Lead]) -> [usize; 24] {
    let mut buckets = [0usize; 24];
    for lead in leads {
        buckets[lead.created_at.hour() as usize] += 1;
    }
    buckets
}
