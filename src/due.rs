//! Due-date arithmetic: how many days until a task is due and what that means.

use crate::error::Result;
use crate::model::Task;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Urgency of a task relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    Future,
    DueToday,
    Overdue,
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueStatus::Future => write!(f, "future"),
            DueStatus::DueToday => write!(f, "due today"),
            DueStatus::Overdue => write!(f, "overdue"),
        }
    }
}

/// Signed whole days from `today` to the task's due date.
///
/// Positive means the task is due in the future, zero means today and
/// negative means it is overdue. Fails with a parse error if the stored
/// due date is not a valid ISO date.
pub fn days_until_due(task: &Task, today: NaiveDate) -> Result<i64> {
    let due = task.due_date()?;
    Ok((due - today).num_days())
}

pub fn classify(days: i64) -> DueStatus {
    match days {
        0 => DueStatus::DueToday,
        d if d < 0 => DueStatus::Overdue,
        _ => DueStatus::Future,
    }
}

/// Human phrase for a day offset, as shown in listings.
pub fn describe(days: i64) -> String {
    match days {
        0 => "Due today".to_string(),
        1 => "Due tomorrow".to_string(),
        -1 => "Overdue by 1 day".to_string(),
        d if d < 0 => format!("Overdue by {} days", -d),
        d => format!("Due in {} days", d),
    }
}
