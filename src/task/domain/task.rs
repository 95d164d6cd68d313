//! Task record and its lifecycle rules.

use super::{TaskDraft, TaskId, TaskPatch, TaskStatus, calendar_date};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Longest accepted task title, in characters.
pub const TITLE_MAX_CHARS: usize = 255;

/// Task as held by the remote service and mirrored locally.
///
/// The JSON field names match the service's wire format exactly. Decoding
/// goes through [`TaskData`], so a payload whose `updated_at` precedes
/// `created_at` is clamped the same way [`Task::from_data`] clamps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TaskData")]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    #[serde(serialize_with = "calendar_date::serialize")]
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for building a task from known field values.
///
/// Also the wire shape a [`Task`] is decoded from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskData {
    /// Backend-assigned identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Progress state.
    pub status: TaskStatus,
    /// Optional calendar due date.
    #[serde(default, deserialize_with = "calendar_date::deserialize")]
    pub due_date: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<TaskData> for Task {
    fn from(data: TaskData) -> Self {
        Self::from_data(data)
    }
}

impl Task {
    /// Builds a task from field values.
    ///
    /// An `updated_at` earlier than `created_at` is raised to `created_at`.
    #[must_use]
    pub fn from_data(data: TaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at.max(data.created_at),
        }
    }

    /// Materializes a draft the way the service does on creation.
    #[must_use]
    pub fn new_from_draft(id: TaskId, draft: &TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            title: draft.title().to_owned(),
            description: draft.description().map(str::to_owned),
            status: draft.status(),
            due_date: draft.due_date(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the progress state.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merges a partial update into this task and refreshes `updated_at`.
    pub fn apply_patch(&mut self, patch: &TaskPatch, clock: &impl Clock) {
        if let Some(title) = patch.title() {
            title.clone_into(&mut self.title);
        }
        if let Some(description) = patch.description() {
            self.description = description.map(str::to_owned);
        }
        if let Some(status) = patch.status() {
            self.status = status;
        }
        if let Some(due_date) = patch.due_date() {
            self.due_date = due_date;
        }
        self.touch(clock);
    }

    /// Updates `updated_at`, never moving it before `created_at`.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc().max(self.created_at);
    }
}
