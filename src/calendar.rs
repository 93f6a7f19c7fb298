//! Calendar export: one all-day event per task.

use crate::model::StudyList;
use serde::Serialize;

/// An event as consumed by month-view calendar widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    /// The task's stored due date, `YYYY-MM-DD`.
    pub start: String,
}

pub fn calendar_events(list: &StudyList) -> Vec<CalendarEvent> {
    list.iter()
        .map(|task| CalendarEvent {
            title: task.name.clone(),
            start: task.due_date.clone(),
        })
        .collect()
}
