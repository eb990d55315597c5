use chrono::{TimeZone, Utc};
use leadledger_core::service::lead_service::reconcile;
use leadledger_core::{
    Lead, LeadService, LeadSource, LeadStatus, MemoryStorage, RawLead, SourceError, StatusUpdate,
};

fn raw(id: &str, name: &str) -> RawLead {
    RawLead {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", id.to_lowercase()),
        phone: "9900112233".to_string(),
        course: "Full Stack".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 8, 1, 9, 30, 0).unwrap(),
    }
}

struct StubSource(Vec<RawLead>);

impl LeadSource for StubSource {
    fn fetch_leads(&self) -> Result<Vec<RawLead>, SourceError> {
        Ok(self.0.clone())
    }
}

struct FailingSource;

impl LeadSource for FailingSource {
    fn fetch_leads(&self) -> Result<Vec<RawLead>, SourceError> {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        Err(SourceError::Decode(err))
    }
}

#[test]
fn fresh_lead_gets_default_overlay() {
    let merged = reconcile(&[raw("L1", "Asha Rao")], &[]);

    assert_eq!(merged.len(), 1);
    let lead = &merged[0];
    assert_eq!(lead.status, LeadStatus::New);
    assert!(lead.remarks.is_empty());
    assert_eq!(lead.counselor, None);
    assert_eq!(lead.last_updated, lead.created_at);
}

#[test]
fn reconcile_is_idempotent() {
    let raw_leads = vec![raw("L1", "Asha Rao"), raw("L2", "Vikram Shetty")];
    let first = reconcile(&raw_leads, &[]);
    let second = reconcile(&raw_leads, &first);
    let third = reconcile(&raw_leads, &second);

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn reconcile_preserves_local_overlay_and_refreshes_remote_fields() {
    let mut storage = MemoryStorage::new();
    let mut service = LeadService::new(&mut storage);
    service
        .refresh(&StubSource(vec![raw("L1", "Asha Rao")]))
        .unwrap();
    service
        .update_status(&StatusUpdate {
            lead_id: "L1".to_string(),
            status: LeadStatus::FollowUp,
            remark: "Called once".to_string(),
            counselor: "counselor1".to_string(),
        })
        .unwrap();

    // Remote renames the lead; local overlay must survive.
    let merged = service
        .refresh(&StubSource(vec![raw("L1", "Asha R.")]))
        .unwrap();

    assert_eq!(merged[0].name, "Asha R.");
    assert_eq!(merged[0].status, LeadStatus::FollowUp);
    assert_eq!(merged[0].remarks.len(), 1);
    assert_eq!(merged[0].counselor.as_deref(), Some("counselor1"));
}

#[test]
fn reconcile_keeps_remote_order() {
    let raw_leads = vec![raw("L3", "C"), raw("L1", "A"), raw("L2", "B")];
    let merged = reconcile(&raw_leads, &[]);
    let ids: Vec<&str> = merged.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["L3", "L1", "L2"]);
}

#[test]
fn refresh_persists_merged_list() {
    let mut storage = MemoryStorage::new();
    {
        let mut service = LeadService::new(&mut storage);
        service
            .refresh(&StubSource(vec![raw("L1", "Asha Rao")]))
            .unwrap();
    }

    // A new service over the same storage sees the persisted list.
    let service = LeadService::new(&mut storage);
    let leads: Vec<Lead> = service.leads().unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].id, "L1");
}

#[test]
fn failed_fetch_leaves_store_unchanged() {
    let mut storage = MemoryStorage::new();
    let mut service = LeadService::new(&mut storage);
    service
        .refresh(&StubSource(vec![raw("L1", "Asha Rao")]))
        .unwrap();

    let err = service.refresh(&FailingSource).unwrap_err();
    assert!(matches!(
        err,
        leadledger_core::LeadServiceError::Source(_)
    ));

    let leads = service.leads().unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].id, "L1");
}
