//! Reminder dispatch.
//!
//! A task with a reminder address gets exactly one email when it is due
//! tomorrow. Delivery is recorded on the task (`reminded = true`) and the
//! whole planner state is persisted straight away, so a later run in the
//! same or the next session does not send it again. A failed delivery
//! leaves the task armed for the next run.

use crate::due::days_until_due;
use crate::error::Result;
use crate::model::{PlannerState, Task, TaskId};
use chrono::NaiveDate;
use serde::Serialize;

/// Days before the due date at which the reminder goes out.
pub const REMINDER_LEAD_DAYS: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl ReminderMessage {
    /// Build the reminder for a task. `None` if the task has no address.
    pub fn for_task(task: &Task, user_name: &str) -> Option<Self> {
        let recipient = task.user_email.clone()?;
        let greeting = if user_name.trim().is_empty() {
            "Hi there,".to_string()
        } else {
            format!("Hi {},", user_name.trim())
        };
        let body = format!(
            "{}\n\n\
             This is a reminder that your assignment \"{}\" is due tomorrow ({}).\n\n\
             Good luck with your studies!\n",
            greeting, task.name, task.due_date
        );

        Some(Self {
            recipient,
            subject: format!("Reminder: {} due soon!", task.name),
            body,
        })
    }
}

/// Outbound transport for reminder emails.
pub trait ReminderSender {
    fn send(&self, message: &ReminderMessage) -> Result<()>;
}

/// Whether this task should get its reminder today.
///
/// Only an armed, open task due exactly tomorrow qualifies. Fails with a
/// parse error when an otherwise armed task has an unreadable due date.
pub fn is_due_for_reminder(task: &Task, today: NaiveDate) -> Result<bool> {
    if task.user_email.is_none() || task.reminded || task.done {
        return Ok(false);
    }
    Ok(days_until_due(task, today)? == REMINDER_LEAD_DAYS)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingReminder {
    pub id: TaskId,
    pub name: String,
    #[serde(flatten)]
    pub message: ReminderMessage,
}

/// A task the run could not deliver to, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderIssue {
    pub id: TaskId,
    pub name: String,
    pub reason: String,
}

/// What a reminder run did, or would do in a dry run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReminderReport {
    pub sent: Vec<PendingReminder>,
    pub failed: Vec<ReminderIssue>,
    /// Armed tasks whose due date could not be read.
    pub skipped: Vec<ReminderIssue>,
}

impl ReminderReport {
    pub fn is_empty(&self) -> bool {
        self.sent.is_empty() && self.failed.is_empty() && self.skipped.is_empty()
    }
}

/// Reminders that a run would send now, without sending anything.
///
/// The returned report lists them under `sent`.
pub fn pending_reminders(state: &PlannerState, today: NaiveDate) -> ReminderReport {
    let mut report = ReminderReport::default();
    for task in &state.study_list {
        match is_due_for_reminder(task, today) {
            Ok(true) => {
                if let Some(message) = ReminderMessage::for_task(task, &state.user_name) {
                    report.sent.push(PendingReminder {
                        id: task.id,
                        name: task.name.clone(),
                        message,
                    });
                }
            }
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(id = %task.id, "Cannot check reminder: {}", e);
                report.skipped.push(ReminderIssue {
                    id: task.id,
                    name: task.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }
    report
}

/// Run one reminder cycle.
///
/// Each due reminder is handed to `sender`. After a successful delivery the
/// task is marked reminded and `persist` is called with the full state
/// before the next task is tried. A failed delivery is reported and the
/// task stays armed. An error from `persist` aborts the run.
pub fn run_reminders<S, P>(
    state: &mut PlannerState,
    today: NaiveDate,
    sender: &S,
    mut persist: P,
) -> Result<ReminderReport>
where
    S: ReminderSender + ?Sized,
    P: FnMut(&PlannerState) -> Result<()>,
{
    let plan = pending_reminders(state, today);
    let mut report = ReminderReport {
        skipped: plan.skipped,
        ..ReminderReport::default()
    };

    for pending in plan.sent {
        match sender.send(&pending.message) {
            Ok(()) => {
                if let Some(position) = state.study_list.position_of(pending.id) {
                    state.study_list.mark_reminded(position)?;
                }
                persist(state)?;
                tracing::info!(
                    id = %pending.id,
                    recipient = %pending.message.recipient,
                    "Sent reminder for '{}'",
                    pending.name
                );
                report.sent.push(pending);
            }
            Err(e) => {
                tracing::warn!(id = %pending.id, "Reminder for '{}' failed: {}", pending.name, e);
                report.failed.push(ReminderIssue {
                    id: pending.id,
                    name: pending.name,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}
