//! Data models for the planner.
//!
//! - [`Task`]: one assignment with priority, due date, completion and reminder state
//! - [`StudyList`]: the ordered task list and its positional operations
//! - [`PlannerState`]: the persisted unit, a user name plus the study list
//! - [`Priority`], [`TaskId`], [`ReminderState`]: supporting value types

mod state;
mod task;
mod types;

pub use state::{FieldEdit, PlannerState, StudyList, TaskRef};
pub use task::{DATE_FORMAT, Task, format_date};
pub use types::{Priority, ReminderState, TaskId};
