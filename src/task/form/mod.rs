//! Task form capture, validation and dialog state.
//!
//! The form never performs I/O. It turns raw field input into a validated
//! [`TaskFormValues`] or a set of field-scoped [`FormErrors`], and the
//! dialog types track which form is open and for which task.

mod dialog;
mod errors;
mod input;

pub use dialog::{DeletePrompt, FormSubmission, TaskDialog};
pub use errors::{FieldError, FormErrors, FormField};
pub use input::{TaskForm, TaskFormValues};
