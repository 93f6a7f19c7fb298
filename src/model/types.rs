use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How urgent an assignment is. Persisted as its numeric rank (1-3).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    #[default]
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

impl FromStr for Priority {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(PlannerError::Validation(format!(
                "Invalid priority '{}'. Valid options are: Low, Medium, High",
                s
            ))),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.rank()
    }
}

impl TryFrom<u8> for Priority {
    type Error = PlannerError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Priority::Low),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::High),
            _ => Err(PlannerError::Validation(format!(
                "Invalid priority rank {}. Expected 1 (Low), 2 (Medium) or 3 (High)",
                value
            ))),
        }
    }
}

/// Stable identity of a task within a study list.
///
/// Zero means "not yet assigned"; records written before ids existed load
/// with zero and receive a fresh id when the list is built.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TaskId(pub u32);

impl TaskId {
    pub fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a task sits in the reminder lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderState {
    /// No recipient, so nothing will ever be sent.
    NoEmail,
    /// Recipient set and no reminder delivered yet.
    Armed,
    /// Reminder delivered to the current recipient.
    Sent,
}

impl fmt::Display for ReminderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReminderState::NoEmail => write!(f, "no email"),
            ReminderState::Armed => write!(f, "armed"),
            ReminderState::Sent => write!(f, "sent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_total_order() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert_eq!(Priority::ALL.iter().max(), Some(&Priority::High));
    }

    #[test]
    fn test_priority_from_label() {
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" medium ".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("LOW".parse::<Priority>().unwrap(), Priority::Low);
    }

    #[test]
    fn test_priority_unknown_label_is_validation_error() {
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert!(matches!(err, PlannerError::Validation(_)));
    }

    #[test]
    fn test_priority_serializes_as_rank() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "3");
        let p: Priority = serde_json::from_str("1").unwrap();
        assert_eq!(p, Priority::Low);
        assert!(serde_json::from_str::<Priority>("4").is_err());
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId(7).to_string(), "#7");
        assert!(!TaskId::default().is_assigned());
    }
}
