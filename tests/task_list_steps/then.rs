//! Then steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::then;
use taskboard::task::{
    domain::TaskStatus,
    form::FormField,
    ports::NotificationLevel,
    services::SubmitError,
};

#[then("the list holds {count:usize} tasks")]
fn list_holds(world: &TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.controller.tasks().len();
    eyre::ensure!(held == count, "expected {count} tasks in the list, found {held}");
    Ok(())
}

#[then("the service holds {count:usize} tasks")]
fn service_holds(world: &TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.store.snapshot().len();
    eyre::ensure!(held == count, "expected {count} stored tasks, found {held}");
    Ok(())
}

#[then(r#"the list includes "{title}""#)]
fn list_includes(world: &TaskListWorld, title: String) -> Result<(), eyre::Report> {
    world.task_id(&title).map(|_| ())
}

#[then("an error notification is shown")]
fn error_notification(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let last = world
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("no notification recorded"))?;
    eyre::ensure!(
        last.level() == NotificationLevel::Error,
        "expected an error notification, got {last:?}"
    );
    Ok(())
}

#[then(r#"the notification reads "{text}""#)]
fn notification_reads(world: &TaskListWorld, text: String) -> Result<(), eyre::Report> {
    let last = world
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("no notification recorded"))?;
    eyre::ensure!(
        last.description() == text,
        "expected notification {text:?}, got {:?}",
        last.description()
    );
    Ok(())
}

#[then(r#"the form reports "{message}""#)]
fn form_reports(world: &TaskListWorld, message: String) -> Result<(), eyre::Report> {
    let Some(Err(SubmitError::Invalid(errors))) = world.last_submit.as_ref() else {
        return Err(eyre::eyre!(
            "expected a validation failure, got {:?}",
            world.last_submit
        ));
    };
    let reported = errors
        .for_field(FormField::Title)
        .map(|error| error.message().to_owned());
    eyre::ensure!(
        reported.as_deref() == Some(message.as_str()),
        "expected title error {message:?}, got {reported:?}"
    );
    Ok(())
}

#[then("the dialog is still open")]
fn dialog_open(world: &TaskListWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.dialog.is_open(), "dialog closed after a failed submit");
    Ok(())
}

#[then(r#"the view shows "{titles}""#)]
fn view_shows(world: &TaskListWorld, titles: String) -> Result<(), eyre::Report> {
    let shown: Vec<&str> = world
        .controller
        .view()
        .iter()
        .map(|task| task.title())
        .collect();
    let expected: Vec<&str> = titles.split(", ").collect();
    eyre::ensure!(shown == expected, "expected view {expected:?}, got {shown:?}");
    Ok(())
}

#[then(r#"the task "{title}" is "{status}" in the list"#)]
fn task_has_status(world: &TaskListWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let expected: TaskStatus = status
        .parse()
        .map_err(|err| eyre::eyre!("parse status: {err}"))?;
    let id = world.task_id(&title)?;
    let actual = world
        .controller
        .find(id)
        .map(|task| task.status())
        .ok_or_else(|| eyre::eyre!("task {title:?} vanished"))?;
    eyre::ensure!(actual == expected, "expected {expected}, found {actual}");
    Ok(())
}
