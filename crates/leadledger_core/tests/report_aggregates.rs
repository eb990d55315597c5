use chrono::{NaiveDate, TimeZone, Utc};
use leadledger_core::service::report_service::{
    conversion_trend, daily_totals, hourly_distribution, status_counts,
};
use leadledger_core::{Lead, LeadStatus, RawLead};

fn lead(id: &str, status: LeadStatus, day: u32, hour: u32) -> Lead {
    let mut lead = Lead::from_raw(RawLead {
        id: id.to_string(),
        name: format!("Lead {id}"),
        email: format!("{}@example.com", id.to_lowercase()),
        phone: "9900112233".to_string(),
        course: "Full Stack".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap(),
    });
    lead.status = status;
    lead
}

fn fixture() -> Vec<Lead> {
    vec![
        lead("L1", LeadStatus::Converted, 1, 9),
        lead("L2", LeadStatus::Converted, 1, 9),
        lead("L3", LeadStatus::Walking, 1, 14),
        lead("L4", LeadStatus::New, 1, 23),
        lead("L5", LeadStatus::Converted, 2, 10),
        lead("L6", LeadStatus::FollowUp, 2, 10),
    ]
}

#[test]
fn status_counts_cover_all_statuses_including_zero() {
    let counts = status_counts(&fixture());
    assert_eq!(counts.len(), LeadStatus::ALL.len());

    let get = |status: LeadStatus| {
        counts
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap()
    };
    assert_eq!(get(LeadStatus::Converted), 3);
    assert_eq!(get(LeadStatus::Walking), 1);
    assert_eq!(get(LeadStatus::Rnr), 0);
}

#[test]
fn daily_totals_group_by_calendar_day_in_order() {
    let days = daily_totals(&fixture());
    assert_eq!(days.len(), 2);

    let first = &days[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
    assert_eq!(first.total, 4);
    assert_eq!(first.converted, 2);
    assert_eq!(first.walking, 1);

    let second = &days[1];
    assert_eq!(second.total, 2);
    assert_eq!(second.converted, 1);
    assert_eq!(second.walking, 0);
}

#[test]
fn conversion_trend_is_percentage_per_day() {
    let trend = conversion_trend(&fixture());
    assert_eq!(trend.len(), 2);
    assert!((trend[0].1 - 50.0).abs() < f64::EPSILON);
    assert!((trend[1].1 - 50.0).abs() < f64::EPSILON);
}

#[test]
fn hourly_distribution_buckets_by_creation_hour() {
    let buckets = hourly_distribution(&fixture());
    assert_eq!(buckets.iter().sum::<usize>(), 6);
    assert_eq!(buckets[9], 2);
    assert_eq!(buckets[10], 2);
    assert_eq!(buckets[14], 1);
    assert_eq!(buckets[23], 1);
    assert_eq!(buckets[0], 0);
}

#[test]
fn aggregates_on_empty_input_are_empty_or_zero() {
    assert!(daily_totals(&[]).is_empty());
    assert!(conversion_trend(&[]).is_empty());
    assert_eq!(hourly_distribution(&[]).iter().sum::<usize>(), 0);
    assert!(status_counts(&[]).iter().all(|(_, n)| *n == 0));
}
