use super::types::{Priority, ReminderState, TaskId};
use crate::error::{PlannerError, Result};
use crate::validation;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Format used for due dates on disk and in calendar exports.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: TaskId,

    pub name: String,

    pub priority: Priority,

    /// ISO 8601 calendar date. Kept as text so that a hand-edited record
    /// with a bad date only affects that task.
    pub due_date: String,

    #[serde(default)]
    pub done: bool,

    #[serde(default)]
    pub reminded: bool,

    #[serde(default, deserialize_with = "deserialize_email")]
    pub user_email: Option<String>,
}

/// Stored addresses go through the same trimming as typed ones.
fn deserialize_email<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let email = Option::<String>::deserialize(deserializer)?;
    Ok(validation::normalize_email(email.as_deref()))
}

impl Task {
    pub fn new(name: String, priority: Priority, due_date: NaiveDate) -> Self {
        Self {
            id: TaskId::default(),
            name,
            priority,
            due_date: format_date(due_date),
            done: false,
            reminded: false,
            user_email: None,
        }
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.user_email = email;
        self
    }

    /// Parse the stored due date.
    pub fn due_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.due_date, DATE_FORMAT).map_err(|_| PlannerError::Parse {
            task: self.name.clone(),
            value: self.due_date.clone(),
        })
    }

    pub fn set_due_date(&mut self, date: NaiveDate) {
        self.due_date = format_date(date);
    }

    pub fn is_open(&self) -> bool {
        !self.done
    }

    pub fn reminder_state(&self) -> ReminderState {
        match (&self.user_email, self.reminded) {
            (None, _) => ReminderState::NoEmail,
            (Some(_), false) => ReminderState::Armed,
            (Some(_), true) => ReminderState::Sent,
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Essay".to_string(), Priority::High, date(2025, 3, 15));
        assert_eq!(task.due_date, "2025-03-15");
        assert!(!task.done);
        assert!(!task.reminded);
        assert!(task.user_email.is_none());
        assert_eq!(task.reminder_state(), ReminderState::NoEmail);
    }

    #[test]
    fn test_due_date_parses_stored_text() {
        let task = Task::new("Essay".to_string(), Priority::Low, date(2024, 2, 29));
        assert_eq!(task.due_date().unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_bad_due_date_is_parse_error() {
        let mut task = Task::new("Essay".to_string(), Priority::Low, date(2025, 1, 1));
        task.due_date = "next friday".to_string();
        let err = task.due_date().unwrap_err();
        assert!(matches!(err, PlannerError::Parse { ref value, .. } if value == "next friday"));
    }

    #[test]
    fn test_reminder_state_transitions() {
        let mut task = Task::new("Quiz".to_string(), Priority::Medium, date(2025, 1, 1))
            .with_email(Some("me@example.com".to_string()));
        assert_eq!(task.reminder_state(), ReminderState::Armed);
        task.reminded = true;
        assert_eq!(task.reminder_state(), ReminderState::Sent);
    }

    #[test]
    fn test_legacy_record_defaults() {
        let json = r#"{"name":"Lab report","priority":2,"due_date":"2025-04-01","done":false}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(!task.reminded);
        assert!(task.user_email.is_none());
        assert!(!task.id.is_assigned());
    }

    #[test]
    fn test_blank_stored_email_means_no_email() {
        let json = r#"{"name":"Quiz","priority":1,"due_date":"2025-04-01","user_email":"  "}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.user_email.is_none());
        assert_eq!(task.reminder_state(), ReminderState::NoEmail);

        let json = r#"{"name":"Quiz","priority":1,"due_date":"2025-04-01","user_email":" a@b.io "}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.user_email.as_deref(), Some("a@b.io"));
    }

    #[test]
    fn test_serialized_record_keeps_null_email() {
        let task = Task::new("Quiz".to_string(), Priority::Medium, date(2025, 1, 1));
        let json = serde_json::to_value(&task).unwrap();
        assert!(json["user_email"].is_null());
        assert_eq!(json["priority"], 2);
        assert_eq!(json["due_date"], "2025-01-01");
    }
}
