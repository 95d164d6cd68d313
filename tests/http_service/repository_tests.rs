//! Requests and error mapping of the HTTP task repository.

use super::server::{FakeService, client_for, unreachable_url};
use chrono::NaiveDate;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{SortKey, TaskDraft, TaskId, TaskPatch, TaskQuery, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};

async fn service_with_two_tasks() -> Result<FakeService, eyre::Report> {
    let store = InMemoryTaskRepository::new();
    store
        .create(TaskDraft::new("zeta").with_status(TaskStatus::Pending))
        .await?;
    store
        .create(
            TaskDraft::new("alpha")
                .with_status(TaskStatus::Completed)
                .with_description("first letter"),
        )
        .await?;
    FakeService::start(store).await
}

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_the_service_collection() -> Result<(), eyre::Report> {
    let service = service_with_two_tasks().await?;
    let client = client_for(&service.api_url())?;

    let tasks = client.list(TaskQuery::new()).await?;

    assert_eq!(tasks, service.store.snapshot());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn list_forwards_status_and_sort_parameters() -> Result<(), eyre::Report> {
    let service = service_with_two_tasks().await?;
    let client = client_for(&service.api_url())?;

    let sorted = client
        .list(TaskQuery::new().with_sort(SortKey::Title))
        .await?;
    let completed = client
        .list(TaskQuery::new().with_status(TaskStatus::Completed))
        .await?;

    let titles: Vec<&str> = sorted.iter().map(|task| task.title()).collect();
    assert_eq!(titles, vec!["alpha", "zeta"]);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].description(), Some("first letter"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn create_returns_the_stored_task() -> Result<(), eyre::Report> {
    let service = FakeService::start(InMemoryTaskRepository::new()).await?;
    let client = client_for(&service.api_url())?;
    let due = NaiveDate::from_ymd_opt(2025, 12, 24).ok_or_else(|| eyre::eyre!("bad date"))?;

    let created = client
        .create(TaskDraft::new("Wrap presents").with_due_date(due))
        .await?;

    assert_eq!(created.id(), TaskId::new(1));
    assert_eq!(created.status(), TaskStatus::Pending);
    assert_eq!(created.due_date(), Some(due));
    assert_eq!(service.store.snapshot(), vec![created]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_create_is_a_validation_error_with_the_body_message() -> Result<(), eyre::Report> {
    let service = FakeService::start(InMemoryTaskRepository::new()).await?;
    let client = client_for(&service.api_url())?;

    let error = client
        .create(TaskDraft::new(""))
        .await
        .expect_err("blank title is rejected");

    assert!(matches!(error, TaskRepositoryError::Validation { status: 422, .. }));
    assert_eq!(error.to_string(), "The title field is required.");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn update_sends_only_the_patched_fields() -> Result<(), eyre::Report> {
    let service = service_with_two_tasks().await?;
    let client = client_for(&service.api_url())?;

    let completed = client
        .update(TaskId::new(1), TaskPatch::status_change(TaskStatus::Completed))
        .await?;
    let cleared = client
        .update(TaskId::new(2), TaskPatch::new().with_description(None))
        .await?;

    assert_eq!(completed.title(), "zeta");
    assert_eq!(completed.status(), TaskStatus::Completed);
    assert_eq!(cleared.description(), None);
    assert_eq!(cleared.status(), TaskStatus::Completed);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_id_is_a_network_error_with_the_body_message() -> Result<(), eyre::Report> {
    let service = service_with_two_tasks().await?;
    let client = client_for(&service.api_url())?;

    let error = client
        .get(TaskId::new(99))
        .await
        .expect_err("unknown id");

    assert!(matches!(error, TaskRepositoryError::Network { status: 404, .. }));
    assert_eq!(error.to_string(), "Task 99 not found");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_task_and_reports_failures_generically() -> Result<(), eyre::Report> {
    let service = service_with_two_tasks().await?;
    let client = client_for(&service.api_url())?;

    client.delete(TaskId::new(1)).await?;
    let error = client
        .delete(TaskId::new(1))
        .await
        .expect_err("second delete fails");

    assert_eq!(service.store.snapshot().len(), 1);
    assert_eq!(error.status(), Some(404));
    assert_eq!(error.to_string(), "HTTP error! status: 404");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn failures_without_a_body_use_the_generic_message() -> Result<(), eyre::Report> {
    let service = FakeService::start(InMemoryTaskRepository::new()).await?;
    let client = client_for(&service.broken_url())?;

    let listed = client
        .list(TaskQuery::new())
        .await
        .expect_err("server error");
    let created = client
        .create(TaskDraft::new("anything"))
        .await
        .expect_err("server error");
    let updated = client
        .update(TaskId::new(1), TaskPatch::new().with_title("x"))
        .await
        .expect_err("rejected");

    assert!(matches!(listed, TaskRepositoryError::Network { status: 500, .. }));
    assert_eq!(listed.to_string(), "HTTP error! status: 500");
    assert!(matches!(created, TaskRepositoryError::Network { status: 500, .. }));
    assert!(matches!(updated, TaskRepositoryError::Validation { status: 422, .. }));
    assert_eq!(updated.to_string(), "HTTP error! status: 422");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_success_body_is_a_transport_error() -> Result<(), eyre::Report> {
    let service = FakeService::start(InMemoryTaskRepository::new()).await?;
    let client = client_for(&service.broken_url())?;

    let error = client
        .get(TaskId::new(1))
        .await
        .expect_err("body is not json");

    assert!(matches!(error, TaskRepositoryError::Transport(_)));
    assert_eq!(error.status(), None);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_service_is_a_transport_error() -> Result<(), eyre::Report> {
    let client = client_for(&unreachable_url().await?)?;

    let error = client
        .list(TaskQuery::new())
        .await
        .expect_err("nothing is listening");

    assert!(matches!(error, TaskRepositoryError::Transport(_)));
    Ok(())
}
