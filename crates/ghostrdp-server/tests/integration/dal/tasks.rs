use ghostrdp_models::models::{NewTask, TaskChanges, TaskStatus};
use ghostrdp_server::dal::DalError;

use crate::fixtures::TestFixture;

#[test]
fn test_successive_updates_strictly_advance_updated_at() {
    let fixture = TestFixture::new();
    let task = fixture
        .dal
        .tasks()
        .create(&NewTask::new(Some("Backup".to_string()), None).unwrap())
        .expect("Failed to create task");

    let mut previous = task.updated_at;
    for _ in 0..5 {
        let updated = fixture
            .dal
            .tasks()
            .update(task.id, TaskChanges::default())
            .expect("Failed to update task");
        assert!(updated.updated_at > previous);
        assert_eq!(updated.created_at, task.created_at);
        previous = updated.updated_at;
    }
    assert_eq!(fixture.audit_count(), 6);
}

#[test]
fn test_update_changes_only_given_fields() {
    let fixture = TestFixture::new();
    let task = fixture
        .dal
        .tasks()
        .create(&NewTask::new(Some("Backup".to_string()), Some(TaskStatus::InProgress)).unwrap())
        .unwrap();

    let changes = TaskChanges {
        description: Some("Nightly backup".to_string()),
        ..Default::default()
    };
    let updated = fixture.dal.tasks().update(task.id, changes).unwrap();

    assert_eq!(updated.description, "Nightly backup");
    assert_eq!(updated.status, TaskStatus::InProgress);
}

#[test]
fn test_update_missing_task_writes_nothing() {
    let fixture = TestFixture::new();

    let result = fixture.dal.tasks().update(12, TaskChanges::default());

    assert!(matches!(result, Err(DalError::NotFound(ref msg)) if msg == "Task 12 not found"));
    assert_eq!(fixture.audit_count(), 0);
}
