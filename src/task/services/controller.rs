//! Task list controller: owns the local collection and reconciles it with
//! the remote service after every mutation.

use std::sync::Arc;
use thiserror::Error;

use super::view::derive_view;
use crate::task::{
    domain::{
        SortKey, StatusFilter, Task, TaskDraft, TaskId, TaskPatch, TaskQuery, TaskStats,
        TaskStatus, sample_tasks,
    },
    form::{FormErrors, FormSubmission, TaskDialog},
    ports::{Notification, Notifier, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Result of [`TaskListController::load`].
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The service returned the collection.
    Fetched {
        /// Number of tasks now held.
        count: usize,
    },
    /// The service call failed and the sample tasks were substituted.
    SampleFallback {
        /// Failure that triggered the fallback.
        error: TaskRepositoryError,
    },
}

impl LoadOutcome {
    /// Returns `true` when the sample tasks are being shown.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::SampleFallback { .. })
    }
}

/// Errors returned by [`TaskListController::submit_dialog`].
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    /// No dialog was open.
    #[error("no task dialog is open")]
    DialogClosed,

    /// The form failed validation; nothing was sent.
    #[error("{0}")]
    Invalid(FormErrors),

    /// The service rejected or failed the request.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Holds the authoritative task collection and the view settings.
///
/// All mutations go through the controller. Each operation awaits its single
/// service call before the collection changes, so the collection always
/// reflects the most recently completed mutation.
pub struct TaskListController<R, N>
where
    R: TaskRepository,
    N: Notifier,
{
    repository: Arc<R>,
    notifier: Arc<N>,
    tasks: Vec<Task>,
    status_filter: StatusFilter,
    sort_key: SortKey,
    loading: bool,
}

impl<R, N> TaskListController<R, N>
where
    R: TaskRepository,
    N: Notifier,
{
    /// Creates a controller with an empty collection, awaiting its first
    /// load.
    #[must_use]
    pub const fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
            tasks: Vec::new(),
            status_filter: StatusFilter::All,
            sort_key: SortKey::CreatedAt,
            loading: true,
        }
    }

    /// Returns the authoritative collection in its stored order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task in the local collection.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the filtered and sorted view of the collection.
    #[must_use]
    pub fn view(&self) -> Vec<&Task> {
        derive_view(&self.tasks, self.status_filter, self.sort_key)
    }

    /// Returns per-status counts over the whole collection.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Returns the active status filter.
    #[must_use]
    pub const fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// Changes the status filter.
    pub const fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// Returns the active sort key.
    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Changes the sort key.
    pub const fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Returns `true` while a load is in progress or before the first one.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replaces the collection with the service's task list.
    ///
    /// When the service call fails the error is reported and the built-in
    /// sample tasks are shown instead, so the list is never left empty by a
    /// failed first load.
    pub async fn load(&mut self) -> LoadOutcome {
        self.loading = true;
        let outcome = match self.repository.list(TaskQuery::new()).await {
            Ok(tasks) => {
                self.tasks = unique_by_id(tasks);
                let count = self.tasks.len();
                tracing::info!(count, "tasks loaded");
                self.notifier.notify(Notification::success(
                    "Tasks loaded",
                    format!("Loaded {count} tasks successfully"),
                ));
                LoadOutcome::Fetched { count }
            }
            Err(error) => {
                tracing::error!(%error, "failed to load tasks, showing sample tasks");
                self.report_failure(&error, "Failed to load tasks");
                self.tasks = sample_tasks();
                LoadOutcome::SampleFallback { error }
            }
        };
        self.loading = false;
        outcome
    }

    /// Creates a task and puts it at the front of the collection.
    ///
    /// # Errors
    ///
    /// Returns the repository error after reporting it; the collection is
    /// unchanged.
    pub async fn create(&mut self, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        match self.repository.create(draft).await {
            Ok(task) => {
                let id = task.id();
                self.tasks.retain(|existing| existing.id() != id);
                self.tasks.insert(0, task.clone());
                tracing::info!(task_id = %id, "task created");
                self.notifier
                    .notify(Notification::success("Success", "Task created successfully"));
                Ok(task)
            }
            Err(error) => {
                tracing::error!(%error, "failed to create task");
                self.report_failure(&error, "Failed to create task");
                Err(error)
            }
        }
    }

    /// Updates a task and replaces it in place.
    ///
    /// # Errors
    ///
    /// Returns the repository error after reporting it; the collection is
    /// unchanged.
    pub async fn update(&mut self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task> {
        self.apply_update(id, patch, "Task updated successfully", "Failed to update task")
            .await
    }

    /// Changes a task's status; behaves exactly like [`Self::update`].
    ///
    /// # Errors
    ///
    /// Returns the repository error after reporting it; the collection is
    /// unchanged.
    pub async fn set_status(&mut self, id: TaskId, status: TaskStatus) -> TaskRepositoryResult<Task> {
        let success = format!("Task marked as {status}");
        self.apply_update(
            id,
            TaskPatch::status_change(status),
            &success,
            "Failed to update status",
        )
        .await
    }

    /// Deletes a task and removes it from the collection.
    ///
    /// # Errors
    ///
    /// Returns the repository error after reporting it; the collection is
    /// unchanged.
    pub async fn delete(&mut self, id: TaskId) -> TaskRepositoryResult<()> {
        match self.repository.delete(id).await {
            Ok(()) => {
                self.tasks.retain(|task| task.id() != id);
                tracing::info!(task_id = %id, "task deleted");
                self.notifier
                    .notify(Notification::success("Success", "Task deleted successfully"));
                Ok(())
            }
            Err(error) => {
                tracing::error!(task_id = %id, %error, "failed to delete task");
                self.report_failure(&error, "Failed to delete task");
                Err(error)
            }
        }
    }

    /// Submits the open dialog and closes it on success.
    ///
    /// Validation runs first; an invalid form never reaches the service and
    /// the dialog stays open. A service failure also leaves it open.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::DialogClosed`] when nothing is open,
    /// [`SubmitError::Invalid`] for field errors, or
    /// [`SubmitError::Repository`] when the service call fails.
    pub async fn submit_dialog(&mut self, dialog: &mut TaskDialog) -> Result<Task, SubmitError> {
        let submission = dialog
            .submission()
            .ok_or(SubmitError::DialogClosed)?
            .map_err(SubmitError::Invalid)?;
        let task = match submission {
            FormSubmission::Create(draft) => self.create(draft).await?,
            FormSubmission::Update { id, patch } => self.update(id, patch).await?,
        };
        dialog.close();
        Ok(task)
    }

    async fn apply_update(
        &mut self,
        id: TaskId,
        patch: TaskPatch,
        success: &str,
        fallback: &str,
    ) -> TaskRepositoryResult<Task> {
        match self.repository.update(id, patch).await {
            Ok(task) => {
                if let Some(slot) = self.tasks.iter_mut().find(|existing| existing.id() == id) {
                    *slot = task.clone();
                }
                tracing::info!(task_id = %id, status = %task.status(), "task updated");
                self.notifier.notify(Notification::success("Success", success));
                Ok(task)
            }
            Err(error) => {
                tracing::error!(task_id = %id, %error, "failed to update task");
                self.report_failure(&error, fallback);
                Err(error)
            }
        }
    }

    fn report_failure(&self, error: &TaskRepositoryError, fallback: &str) {
        let message = error.to_string();
        let description = if message.trim().is_empty() {
            fallback.to_owned()
        } else {
            message
        };
        self.notifier.notify(Notification::error(description));
    }
}

/// Drops later duplicates so each id appears once.
fn unique_by_id(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = std::collections::HashSet::with_capacity(tasks.len());
    let total = tasks.len();
    let unique: Vec<Task> = tasks
        .into_iter()
        .filter(|task| seen.insert(task.id()))
        .collect();
    if unique.len() != total {
        tracing::warn!(
            dropped = total - unique.len(),
            "task list contained duplicate ids"
        );
    }
    unique
}
