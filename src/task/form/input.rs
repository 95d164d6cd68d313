//! Raw task form input and its validation rules.

use chrono::NaiveDate;

use super::{FormErrors, FormField};
use crate::task::domain::{
    DATE_FORMAT, TITLE_MAX_CHARS, Task, TaskDraft, TaskPatch, TaskStatus,
};

/// Status as captured from the form, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
enum StatusInput {
    Selected(TaskStatus),
    Unrecognized(String),
}

/// Field input for creating or editing a task, held as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    description: String,
    status: StatusInput,
    due_date: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskForm {
    /// Creates a blank form for a new task; status defaults to pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: StatusInput::Selected(TaskStatus::Pending),
            due_date: String::new(),
        }
    }

    /// Creates a form pre-filled from an existing task.
    ///
    /// The due date is rendered from the stored calendar date as
    /// `YYYY-MM-DD`.
    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            description: task.description().unwrap_or_default().to_owned(),
            status: StatusInput::Selected(task.status()),
            due_date: task
                .due_date()
                .map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }

    /// Replaces the title input.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the description input.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Selects a status.
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = StatusInput::Selected(status);
    }

    /// Captures a status typed as text; unknown values fail validation.
    pub fn set_status_text(&mut self, text: &str) {
        self.status = TaskStatus::try_from(text)
            .map_or_else(|_| StatusInput::Unrecognized(text.to_owned()), StatusInput::Selected);
    }

    /// Replaces the due date input (`YYYY-MM-DD`, blank for none).
    pub fn set_due_date(&mut self, due_date: impl Into<String>) {
        self.due_date = due_date.into();
    }

    /// Returns the title input.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description input.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the selected status, if the status input is recognized.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        match self.status {
            StatusInput::Selected(status) => Some(status),
            StatusInput::Unrecognized(_) => None,
        }
    }

    /// Returns the due date input.
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Validates every field and returns the cleaned values.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] listing every field that failed.
    pub fn validate(&self) -> Result<TaskFormValues, FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(FormField::Title, "Title is required");
        } else if title.chars().count() > TITLE_MAX_CHARS {
            errors.push(FormField::Title, "Title is too long");
        }

        let status = match &self.status {
            StatusInput::Selected(status) => Some(*status),
            StatusInput::Unrecognized(_) => {
                errors.push(
                    FormField::Status,
                    "Status must be pending, in-progress or completed",
                );
                None
            }
        };

        let due_date_input = self.due_date.trim();
        let due_date = if due_date_input.is_empty() {
            None
        } else if let Ok(date) = NaiveDate::parse_from_str(due_date_input, DATE_FORMAT) {
            Some(date)
        } else {
            errors.push(FormField::DueDate, "Due date must be a valid date");
            None
        };

        match status {
            Some(status) if errors.is_empty() => Ok(TaskFormValues {
                title: title.to_owned(),
                description: non_blank(&self.description),
                status,
                due_date,
            }),
            _ => Err(errors),
        }
    }
}

fn non_blank(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}

/// Validated form output, ready to become a draft or a patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFormValues {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
}

impl TaskFormValues {
    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if not blank.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if given.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Converts the values into a creation payload.
    #[must_use]
    pub fn into_draft(self) -> TaskDraft {
        let mut draft = TaskDraft::new(self.title).with_status(self.status);
        if let Some(description) = self.description {
            draft = draft.with_description(description);
        }
        if let Some(due_date) = self.due_date {
            draft = draft.with_due_date(due_date);
        }
        draft
    }

    /// Converts the values into a full-form update.
    ///
    /// Blank optional fields clear the stored value.
    #[must_use]
    pub fn into_patch(self) -> TaskPatch {
        TaskPatch::new()
            .with_title(self.title)
            .with_description(self.description)
            .with_status(self.status)
            .with_due_date(self.due_date)
    }
}
