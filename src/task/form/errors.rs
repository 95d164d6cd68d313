//! Field-scoped validation errors.

use std::fmt;

/// Form field an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Task title.
    Title,
    /// Task description.
    Description,
    /// Task status.
    Status,
    /// Task due date.
    DueDate,
}

impl FormField {
    /// Returns the field name as used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Status => "status",
            Self::DueDate => "due_date",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation failure attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    field: FormField,
    message: String,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Returns the field the error belongs to.
    #[must_use]
    pub const fn field(&self) -> FormField {
        self.field
    }

    /// Returns the message shown next to the field.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every validation failure found in one submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    /// Records a failure for `field`.
    pub fn push(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Returns the first failure recorded for `field`.
    #[must_use]
    pub fn for_field(&self, field: FormField) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field() == field)
    }

    /// Iterates over the failures in the order they were found.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Returns the number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` when nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}
