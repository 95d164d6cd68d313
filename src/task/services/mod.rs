//! Application services for the task board.

mod controller;
mod view;

pub use controller::{LoadOutcome, SubmitError, TaskListController};
pub use view::{derive_view, filter_tasks, sort_tasks};
