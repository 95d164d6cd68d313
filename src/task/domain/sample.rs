//! Built-in sample tasks shown when the initial load fails.

use super::{Task, TaskData, TaskId, TaskStatus};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const fn calendar_day(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("sample task date out of range"),
    }
}

const fn utc_instant(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => NaiveDateTime::new(date, time),
        None => panic!("sample task time out of range"),
    }
}

const DOCUMENTATION_CREATED: NaiveDateTime = utc_instant(calendar_day(2025, 11, 10), 10, 0);
const REVIEW_CREATED: NaiveDateTime = utc_instant(calendar_day(2025, 11, 9), 14, 30);
const DEPLOY_CREATED: NaiveDateTime = utc_instant(calendar_day(2025, 11, 8), 9, 0);
const DEPLOY_UPDATED: NaiveDateTime = utc_instant(calendar_day(2025, 11, 11), 16, 45);
const DOCUMENTATION_DUE: NaiveDate = calendar_day(2025, 11, 20);
const REVIEW_DUE: NaiveDate = calendar_day(2025, 11, 15);
const DEPLOY_DUE: NaiveDate = calendar_day(2025, 11, 12);

/// Returns the fixed three-task sample collection.
#[must_use]
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::from_data(TaskData {
            id: TaskId::new(1),
            title: "Complete project documentation".to_owned(),
            description: Some(
                "Write comprehensive documentation for the task management system".to_owned(),
            ),
            status: TaskStatus::InProgress,
            due_date: Some(DOCUMENTATION_DUE),
            created_at: DOCUMENTATION_CREATED.and_utc(),
            updated_at: DOCUMENTATION_CREATED.and_utc(),
        }),
        Task::from_data(TaskData {
            id: TaskId::new(2),
            title: "Review pull requests".to_owned(),
            description: Some("Review and merge pending pull requests from the team".to_owned()),
            status: TaskStatus::Pending,
            due_date: Some(REVIEW_DUE),
            created_at: REVIEW_CREATED.and_utc(),
            updated_at: REVIEW_CREATED.and_utc(),
        }),
        Task::from_data(TaskData {
            id: TaskId::new(3),
            title: "Deploy to production".to_owned(),
            description: None,
            status: TaskStatus::Completed,
            due_date: Some(DEPLOY_DUE),
            created_at: DEPLOY_CREATED.and_utc(),
            updated_at: DEPLOY_UPDATED.and_utc(),
        }),
    ]
}
