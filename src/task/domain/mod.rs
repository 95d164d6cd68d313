//! Domain model for the task board.
//!
//! The domain holds the task record as the remote service describes it, the
//! payloads sent to create and patch tasks, and the status filter and sort
//! keys that drive the derived list view. Nothing here performs I/O.

mod dates;
mod error;
mod ids;
mod payload;
mod query;
mod sample;
mod stats;
mod status;
mod task;

pub use dates::{DATE_FORMAT, parse_calendar_date};
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use payload::{TaskDraft, TaskPatch};
pub use query::{SortKey, StatusFilter, TaskQuery};
pub use sample::sample_tasks;
pub use stats::TaskStats;
pub use status::TaskStatus;
pub use task::{TITLE_MAX_CHARS, Task, TaskData};

pub(crate) use dates::{calendar_date, nullable, nullable_calendar_date};
