//! Dialog state for the task form and delete confirmation.

use super::{FormErrors, TaskForm};
use crate::task::domain::{Task, TaskDraft, TaskId, TaskPatch};

/// Validated result of submitting an open task dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    /// Create a new task.
    Create(TaskDraft),
    /// Update an existing task.
    Update {
        /// Task being edited.
        id: TaskId,
        /// Full-form patch.
        patch: TaskPatch,
    },
}

/// Create/edit dialog state machine.
///
/// `Closed` opens into `Create` or `Edit`; either closes on cancel or after
/// a successful submission. There are no other transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskDialog {
    /// No dialog is shown.
    #[default]
    Closed,
    /// Creating a new task.
    Create {
        /// Form input.
        form: TaskForm,
    },
    /// Editing an existing task.
    Edit {
        /// Task being edited.
        task_id: TaskId,
        /// Form input, pre-filled from the task.
        form: TaskForm,
    },
}

impl TaskDialog {
    /// Opens a blank create form, replacing any open dialog.
    pub fn open_create(&mut self) {
        *self = Self::Create {
            form: TaskForm::new(),
        };
    }

    /// Opens an edit form pre-filled from `task`, replacing any open dialog.
    pub fn open_edit(&mut self, task: &Task) {
        *self = Self::Edit {
            task_id: task.id(),
            form: TaskForm::for_task(task),
        };
    }

    /// Closes the dialog without submitting.
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Closes the dialog after a successful submission.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Returns `true` unless the dialog is closed.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Returns the id of the task being edited.
    #[must_use]
    pub const fn editing(&self) -> Option<TaskId> {
        match self {
            Self::Edit { task_id, .. } => Some(*task_id),
            Self::Closed | Self::Create { .. } => None,
        }
    }

    /// Returns the dialog heading.
    #[must_use]
    pub const fn heading(&self) -> Option<&'static str> {
        match self {
            Self::Closed => None,
            Self::Create { .. } => Some("Create New Task"),
            Self::Edit { .. } => Some("Edit Task"),
        }
    }

    /// Returns the open form.
    #[must_use]
    pub const fn form(&self) -> Option<&TaskForm> {
        match self {
            Self::Closed => None,
            Self::Create { form } | Self::Edit { form, .. } => Some(form),
        }
    }

    /// Returns the open form for editing.
    pub const fn form_mut(&mut self) -> Option<&mut TaskForm> {
        match self {
            Self::Closed => None,
            Self::Create { form } | Self::Edit { form, .. } => Some(form),
        }
    }

    /// Validates the open form and builds the matching submission.
    ///
    /// Returns `None` when the dialog is closed. Validation failures leave
    /// the dialog open.
    #[must_use]
    pub fn submission(&self) -> Option<Result<FormSubmission, FormErrors>> {
        match self {
            Self::Closed => None,
            Self::Create { form } => {
                Some(form.validate().map(|values| FormSubmission::Create(values.into_draft())))
            }
            Self::Edit { task_id, form } => Some(form.validate().map(|values| {
                FormSubmission::Update {
                    id: *task_id,
                    patch: values.into_patch(),
                }
            })),
        }
    }
}

/// Delete confirmation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletePrompt {
    /// Nothing is awaiting confirmation.
    #[default]
    Closed,
    /// Waiting for the user to confirm deleting this task.
    Confirm(TaskId),
}

impl DeletePrompt {
    /// Asks for confirmation before deleting `id`.
    pub const fn request(&mut self, id: TaskId) {
        *self = Self::Confirm(id);
    }

    /// Dismisses the prompt.
    pub const fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Returns the task awaiting confirmation.
    #[must_use]
    pub const fn pending(&self) -> Option<TaskId> {
        match self {
            Self::Closed => None,
            Self::Confirm(id) => Some(*id),
        }
    }

    /// Confirms the prompt, closing it and returning the task to delete.
    pub const fn confirm(&mut self) -> Option<TaskId> {
        let pending = self.pending();
        *self = Self::Closed;
        pending
    }
}
