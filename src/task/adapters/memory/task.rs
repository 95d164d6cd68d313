//! In-memory stand-in for the remote task service.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{TITLE_MAX_CHARS, Task, TaskDraft, TaskId, TaskPatch, TaskQuery},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Status the service uses for rejected payloads.
const UNPROCESSABLE_ENTITY: u16 = 422;
/// Status the service uses for unknown task ids.
const NOT_FOUND: u16 = 404;

/// Thread-safe in-memory task collection behaving like the remote service.
///
/// Ids are assigned sequentially and timestamps come from the injected
/// clock. The repository can be switched offline to simulate an
/// unreachable service.
pub struct InMemoryTaskRepository<C = DefaultClock>
where
    C: Clock,
{
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryTaskRepository<C>
where
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    next_id: i64,
    offline: bool,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            offline: false,
        }
    }
}

impl InMemoryTaskRepository<DefaultClock> {
    /// Creates an empty repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock,
{
    /// Creates an empty repository that stamps tasks with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }

    /// Seeds the repository with existing tasks.
    ///
    /// Later tasks replace earlier ones with the same id. New ids continue
    /// after the largest seeded id.
    #[must_use]
    pub fn with_tasks(self, tasks: impl IntoIterator<Item = Task>) -> Self {
        if let Ok(mut state) = self.state.write() {
            for task in tasks {
                state.tasks.retain(|existing| existing.id() != task.id());
                state.next_id = state.next_id.max(task.id().value().saturating_add(1));
                state.tasks.push(task);
            }
        }
        self
    }

    /// Makes every subsequent call fail as if the service were unreachable.
    pub fn go_offline(&self) {
        if let Ok(mut state) = self.state.write() {
            state.offline = true;
        }
    }

    /// Restores normal operation after [`Self::go_offline`].
    pub fn go_online(&self) {
        if let Ok(mut state) = self.state.write() {
            state.offline = false;
        }
    }

    /// Returns a snapshot of the stored tasks in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.state
            .read()
            .map(|state| state.tasks.clone())
            .unwrap_or_default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::transport(std::io::Error::other(err.to_string()))
}

fn ensure_online(state: &InMemoryTaskState) -> TaskRepositoryResult<()> {
    if state.offline {
        return Err(TaskRepositoryError::transport(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "task service is unreachable",
        )));
    }
    Ok(())
}

fn not_found(id: TaskId) -> TaskRepositoryError {
    TaskRepositoryError::network(NOT_FOUND, Some(format!("Task {id} not found")))
}

/// Applies the service's title rules.
fn check_title(title: &str) -> TaskRepositoryResult<()> {
    if title.trim().is_empty() {
        return Err(TaskRepositoryError::validation(
            UNPROCESSABLE_ENTITY,
            Some("The title field is required.".to_owned()),
        ));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(TaskRepositoryError::validation(
            UNPROCESSABLE_ENTITY,
            Some(format!(
                "The title field must not be greater than {TITLE_MAX_CHARS} characters."
            )),
        ));
    }
    Ok(())
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn list(&self, query: TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        ensure_online(&state)?;
        let mut tasks: Vec<Task> = state
            .tasks
            .iter()
            .filter(|task| query.status().is_none_or(|status| task.status() == status))
            .cloned()
            .collect();
        if let Some(sort) = query.sort() {
            tasks.sort_by(sort.comparator());
        }
        Ok(tasks)
    }

    async fn get(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let state = self.state.read().map_err(poisoned)?;
        ensure_online(&state)?;
        state
            .tasks
            .iter()
            .find(|task| task.id() == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;
        ensure_online(&state)?;
        check_title(draft.title())?;

        let id = TaskId::new(state.next_id);
        state.next_id = state.next_id.saturating_add(1);
        let task = Task::new_from_draft(id, &draft, &*self.clock);
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;
        ensure_online(&state)?;
        if let Some(title) = patch.title() {
            check_title(title)?;
        }

        let task = state
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| not_found(id))?;
        task.apply_patch(&patch, &*self.clock);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        ensure_online(&state)?;
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id() != id);
        if state.tasks.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
