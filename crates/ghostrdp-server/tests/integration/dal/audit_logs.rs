use chrono::Duration;
use diesel::prelude::*;
use ghostrdp_models::models::now;
use ghostrdp_models::schema::audit_logs;
use ghostrdp_server::dal::DalError;

use crate::fixtures::TestFixture;

fn backdate_all(fixture: &TestFixture, days: i64) {
    let mut conn = fixture.dal.pool.get().expect("Failed to get connection");
    diesel::update(audit_logs::table)
        .set(audit_logs::timestamp.eq(now() - Duration::days(days)))
        .execute(&mut conn)
        .expect("Failed to backdate audit entries");
}

#[test]
fn test_prune_removes_only_old_entries() {
    let fixture = TestFixture::new();
    fixture.insert_test_account("old-1");
    fixture.insert_test_account("old-2");
    backdate_all(&fixture, 40);
    fixture.insert_test_account("fresh");

    let removed = fixture
        .dal
        .audit_logs()
        .prune_older_than_days(30)
        .expect("Failed to prune");

    assert_eq!(removed, 2);
    let remaining = fixture.dal.audit_logs().recent().unwrap();
    assert_eq!(remaining.len(), 1);
    assert!(remaining[0].message.contains("fresh"));
}

#[test]
fn test_prune_rejects_negative_window() {
    let fixture = TestFixture::new();

    assert!(matches!(
        fixture.dal.audit_logs().prune_older_than_days(-1),
        Err(DalError::Validation(_))
    ));
}

#[test]
fn test_latest_orders_ties_by_id() {
    let fixture = TestFixture::new();
    for name in ["a", "b", "c"] {
        fixture.insert_test_account(name);
    }
    backdate_all(&fixture, 1);

    let entries = fixture.dal.audit_logs().latest(2).unwrap();

    assert_eq!(entries.len(), 2);
    assert!(entries[0].id > entries[1].id);
    assert!(entries[0].message.contains("User created: c"));
}
