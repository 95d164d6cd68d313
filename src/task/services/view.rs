//! Derived view: the filtered and sorted projection of the task collection.

use crate::task::domain::{SortKey, StatusFilter, Task};

/// Keeps the tasks that pass `filter`, in collection order.
#[must_use]
pub fn filter_tasks(tasks: &[Task], filter: StatusFilter) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task.status()))
        .collect()
}

/// Stable-sorts task references under `key`.
pub fn sort_tasks(tasks: &mut [&Task], key: SortKey) {
    let mut compare = key.comparator();
    tasks.sort_by(|left, right| compare(left, right));
}

/// Filters then sorts the collection.
#[must_use]
pub fn derive_view(tasks: &[Task], filter: StatusFilter, key: SortKey) -> Vec<&Task> {
    let mut view = filter_tasks(tasks, filter);
    sort_tasks(&mut view, key);
    view
}
