//! Task form submission through the dialog and delete prompt.

use super::helpers::{Harness, harness, seed};
use rstest::rstest;
use taskboard::task::{
    domain::TaskStatus,
    form::{DeletePrompt, FormField, TaskDialog},
    services::SubmitError,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_dialog_submits_and_closes(harness: Harness) -> Result<(), eyre::Report> {
    let mut harness = harness;
    harness.controller.load().await;
    let mut dialog = TaskDialog::default();
    dialog.open_create();
    let form = dialog
        .form_mut()
        .ok_or_else(|| eyre::eyre!("create form not open"))?;
    form.set_title("Plan sprint");
    form.set_description("Goals and agenda");
    form.set_due_date("2025-12-01");

    let created = harness.controller.submit_dialog(&mut dialog).await?;

    assert!(!dialog.is_open());
    assert_eq!(created.status(), TaskStatus::Pending);
    assert_eq!(created.description(), Some("Goals and agenda"));
    assert_eq!(
        created.due_date().map(|date| date.to_string()),
        Some("2025-12-01".to_owned())
    );
    assert_eq!(harness.titles(), vec!["Plan sprint"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_form_never_reaches_the_service(harness: Harness) -> Result<(), eyre::Report> {
    let mut harness = harness;
    harness.controller.load().await;
    let mut dialog = TaskDialog::default();
    dialog.open_create();
    if let Some(form) = dialog.form_mut() {
        form.set_title("   ");
        form.set_due_date("next week");
    }

    let result = harness.controller.submit_dialog(&mut dialog).await;

    let Err(SubmitError::Invalid(errors)) = result else {
        return Err(eyre::eyre!("expected validation errors, got {result:?}"));
    };
    assert!(errors.for_field(FormField::Title).is_some());
    assert!(errors.for_field(FormField::DueDate).is_some());
    assert!(dialog.is_open());
    assert!(harness.store.snapshot().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_dialog_clears_blank_optional_fields(harness: Harness) -> Result<(), eyre::Report> {
    let mut harness = harness;
    seed(&harness.store, &[("Draft release", TaskStatus::Pending)]).await?;
    harness.controller.load().await;
    let mut dialog = TaskDialog::default();
    let id = harness.controller.tasks()[0].id();
    harness
        .controller
        .update(
            id,
            taskboard::task::domain::TaskPatch::new().with_description(Some("notes".to_owned())),
        )
        .await?;
    let current = harness
        .controller
        .find(id)
        .cloned()
        .ok_or_else(|| eyre::eyre!("task missing"))?;
    dialog.open_edit(&current);
    if let Some(form) = dialog.form_mut() {
        assert_eq!(form.description(), "notes");
        form.set_description("");
        form.set_status(TaskStatus::InProgress);
    }

    let updated = harness.controller.submit_dialog(&mut dialog).await?;

    assert_eq!(updated.description(), None);
    assert_eq!(updated.status(), TaskStatus::InProgress);
    assert_eq!(updated.title(), "Draft release");
    assert!(!dialog.is_open());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_runs_only_after_confirmation(harness: Harness) -> Result<(), eyre::Report> {
    let mut harness = harness;
    seed(
        &harness.store,
        &[("Keep", TaskStatus::Pending), ("Drop", TaskStatus::Completed)],
    )
    .await?;
    harness.controller.load().await;
    let drop_id = harness.controller.tasks()[1].id();
    let mut prompt = DeletePrompt::default();

    prompt.request(drop_id);
    prompt.cancel();
    assert_eq!(harness.store.snapshot().len(), 2);

    prompt.request(drop_id);
    let confirmed = prompt
        .confirm()
        .ok_or_else(|| eyre::eyre!("nothing awaiting confirmation"))?;
    harness.controller.delete(confirmed).await?;

    assert_eq!(harness.titles(), vec!["Keep"]);
    assert_eq!(harness.store.snapshot().len(), 1);
    assert_eq!(
        harness.last_notification()?.description(),
        "Task deleted successfully"
    );
    Ok(())
}
