//! Status filtering, sort keys and list query parameters.

use super::{Task, TaskDomainError, TaskStatus};
use feruca::Collator;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Status filter applied to the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep tasks in exactly this status.
    Only(TaskStatus),
}

impl StatusFilter {
    /// Returns `true` when a task in `status` passes the filter.
    #[must_use]
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    /// Returns the selected status, or `None` for [`StatusFilter::All`].
    #[must_use]
    pub const fn status(self) -> Option<TaskStatus> {
        match self {
            Self::All => None,
            Self::Only(status) => Some(status),
        }
    }

    /// Returns the textual form (`all` or a status value).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }
}

impl From<TaskStatus> for StatusFilter {
    fn from(status: TaskStatus) -> Self {
        Self::Only(status)
    }
}

impl FromStr for StatusFilter {
    type Err = TaskDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        TaskStatus::try_from(value)
            .map(Self::Only)
            .map_err(|_| TaskDomainError::UnknownStatusFilter(value.to_owned()))
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering applied to the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Newest first.
    #[default]
    CreatedAt,
    /// Earliest due date first; undated tasks last.
    DueDate,
    /// Alphabetical by title.
    Title,
}

impl SortKey {
    /// Returns the wire representation used in the `sort` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::DueDate => "due_date",
            Self::Title => "title",
        }
    }

    /// Returns a comparator for tasks under this key.
    ///
    /// Titles are collated with the Unicode Collation Algorithm at the
    /// root locale, so accents and case order the way a user expects
    /// (`apple` < `Apple` < `Éclair` < `Zebra`). The comparator owns its
    /// collator; build one per sort. Tasks that compare equal keep their
    /// relative order under a stable sort.
    #[must_use]
    pub fn comparator(self) -> impl FnMut(&Task, &Task) -> Ordering {
        let mut collator = Collator::default();
        move |left: &Task, right: &Task| match self {
            Self::CreatedAt => right.created_at().cmp(&left.created_at()),
            Self::DueDate => match (left.due_date(), right.due_date()) {
                (Some(left_date), Some(right_date)) => left_date.cmp(&right_date),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::Title => collator.collate(left.title(), right.title()),
        }
    }
}

impl FromStr for SortKey {
    type Err = TaskDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "created_at" => Ok(Self::CreatedAt),
            "due_date" => Ok(Self::DueDate),
            "title" => Ok(Self::Title),
            _ => Err(TaskDomainError::UnknownSortKey(value.to_owned())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional server-side list parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskQuery {
    status: Option<TaskStatus>,
    sort: Option<SortKey>,
}

impl TaskQuery {
    /// Creates a query without parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            sort: None,
        }
    }

    /// Restricts the listing to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Asks the service to order the listing.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Returns the status parameter, if set.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the sort parameter, if set.
    #[must_use]
    pub const fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    /// Returns the query-string pairs for the parameters that are set.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str()));
        }
        pairs
    }
}
