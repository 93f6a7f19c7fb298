//! Progress counts over a study list.

use crate::due::{DueStatus, classify, days_until_due};
use crate::model::StudyList;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub incomplete: usize,
    /// Tasks due today, finished or not.
    pub due_today: usize,
    /// Tasks whose due date has passed, finished or not.
    pub overdue: usize,
    /// Tasks whose stored due date could not be read. They count towards
    /// the totals but not towards `due_today` or `overdue`.
    pub invalid_dates: usize,
}

pub fn summary(list: &StudyList, today: NaiveDate) -> Summary {
    let mut summary = Summary {
        total: list.len(),
        ..Summary::default()
    };

    for task in list {
        if task.done {
            summary.completed += 1;
        } else {
            summary.incomplete += 1;
        }

        match days_until_due(task, today) {
            Ok(days) => match classify(days) {
                DueStatus::DueToday => summary.due_today += 1,
                DueStatus::Overdue => summary.overdue += 1,
                DueStatus::Future => {}
            },
            Err(e) => {
                tracing::warn!(id = %task.id, "Skipping task in summary: {}", e);
                summary.invalid_dates += 1;
            }
        }
    }

    summary
}

/// Share of tasks marked done, in `[0, 1]`. An empty list has made no
/// progress.
pub fn progress_fraction(list: &StudyList) -> f64 {
    if list.is_empty() {
        return 0.0;
    }
    let completed = list.iter().filter(|task| task.done).count();
    completed as f64 / list.len() as f64
}
