//! Ordering of a study list and the "what should I study next" pick.

use crate::model::{StudyList, Task};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// The order tasks were added in.
    #[default]
    Insertion,
    /// High before Medium before Low.
    PriorityDesc,
    /// Earliest due date first. Unreadable dates go last.
    DueDateAsc,
}

/// Tasks in the requested order, each paired with its current 1-based
/// position so callers can still address it.
///
/// The sort is stable: tasks that compare equal keep their insertion order.
pub fn sort_by(list: &StudyList, key: SortKey) -> Vec<(usize, &Task)> {
    let mut entries: Vec<(usize, &Task)> = list
        .iter()
        .enumerate()
        .map(|(i, task)| (i + 1, task))
        .collect();

    match key {
        SortKey::Insertion => {}
        SortKey::PriorityDesc => entries.sort_by_key(|(_, task)| Reverse(task.priority)),
        SortKey::DueDateAsc => entries.sort_by_key(|(_, task)| due_sort_key(task)),
    }
    entries
}

/// The open task to study next: highest priority, then earliest due date,
/// then whichever was added first. `None` when every task is done.
pub fn next_task(list: &StudyList) -> Option<&Task> {
    // min_by_key keeps the first of equal elements, which gives insertion order
    list.iter()
        .filter(|task| task.is_open())
        .min_by_key(|task| (Reverse(task.priority), due_sort_key(task)))
}

fn due_sort_key(task: &Task) -> NaiveDate {
    task.due_date().unwrap_or(NaiveDate::MAX)
}
