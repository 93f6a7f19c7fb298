use super::task::Task;
use super::types::{Priority, TaskId};
use crate::error::{PlannerError, Result};
use crate::validation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::str::FromStr;

/// A single field change applied by [`StudyList::edit_field`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Name(String),
    Priority(Priority),
    DueDate(NaiveDate),
    /// `None` clears the reminder address.
    Email(Option<String>),
}

/// A reference to a task as typed by a user: either its current 1-based
/// position (`3`) or its stable id (`#7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRef {
    Position(usize),
    Id(TaskId),
}

impl FromStr for TaskRef {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || {
            PlannerError::Index(format!(
                "'{}' is not a task number (e.g. 3) or task id (e.g. #7)",
                s
            ))
        };
        match s.strip_prefix('#') {
            Some(id) => id
                .parse::<u32>()
                .ok()
                .filter(|id| *id > 0)
                .map(|id| TaskRef::Id(TaskId(id)))
                .ok_or_else(invalid),
            None => s.parse::<usize>().map(TaskRef::Position).map_err(|_| invalid()),
        }
    }
}

/// Ordered list of tasks. Insertion order is the display and removal order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Vec<Task>")]
pub struct StudyList {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TryFrom<Vec<Task>> for StudyList {
    type Error = PlannerError;

    fn try_from(mut tasks: Vec<Task>) -> Result<Self> {
        let highest = tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
        let mut next_id = bump_id(highest)?;
        let mut seen = HashSet::new();
        for task in tasks.iter_mut() {
            // Unassigned or duplicated ids get a fresh one
            if !task.id.is_assigned() || !seen.insert(task.id) {
                task.id = TaskId(next_id);
                seen.insert(task.id);
                next_id = bump_id(next_id)?;
            }
        }
        Ok(Self { tasks, next_id })
    }
}

fn bump_id(id: u32) -> Result<u32> {
    id.checked_add(1)
        .ok_or_else(|| PlannerError::Validation("task id space is exhausted".to_string()))
}

impl Serialize for StudyList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.tasks.serialize(serializer)
    }
}

impl PartialEq for StudyList {
    fn eq(&self, other: &Self) -> bool {
        self.tasks == other.tasks
    }
}

impl StudyList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Task at a 1-based position.
    pub fn get(&self, index: usize) -> Result<&Task> {
        let slot = self.check_index(index)?;
        Ok(&self.tasks[slot])
    }

    pub fn find_by_id(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// 1-based position of the task with this id.
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id).map(|p| p + 1)
    }

    /// Turn a user-supplied reference into a current 1-based position.
    pub fn resolve(&self, task_ref: TaskRef) -> Result<usize> {
        match task_ref {
            TaskRef::Position(index) => self.check_index(index).map(|_| index),
            TaskRef::Id(id) => self
                .position_of(id)
                .ok_or_else(|| PlannerError::Index(format!("no task with id {}", id))),
        }
    }

    pub fn add(
        &mut self,
        name: &str,
        priority: Priority,
        due_date: NaiveDate,
        email: Option<&str>,
    ) -> Result<&Task> {
        let name = validation::validate_name(name)?;
        let mut task =
            Task::new(name, priority, due_date).with_email(validation::normalize_email(email));
        task.id = self.allocate_id()?;

        tracing::debug!(id = %task.id, name = %task.name, "Adding task");
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Task> {
        let slot = self.check_index(index)?;
        let task = self.tasks.remove(slot);
        tracing::debug!(id = %task.id, name = %task.name, "Removed task");
        Ok(task)
    }

    pub fn edit_field(&mut self, index: usize, edit: FieldEdit) -> Result<&Task> {
        let slot = self.check_index(index)?;
        // Validate before touching the task so a rejected edit changes nothing
        let edit = match edit {
            FieldEdit::Name(name) => FieldEdit::Name(validation::validate_name(&name)?),
            FieldEdit::Email(email) => {
                FieldEdit::Email(validation::normalize_email(email.as_deref()))
            }
            other => other,
        };

        let task = &mut self.tasks[slot];
        match edit {
            FieldEdit::Name(name) => task.name = name,
            FieldEdit::Priority(priority) => task.priority = priority,
            FieldEdit::DueDate(date) => task.set_due_date(date),
            FieldEdit::Email(email) => {
                if email != task.user_email {
                    task.user_email = email;
                    task.reminded = false;
                }
            }
        }
        Ok(&self.tasks[slot])
    }

    /// Mark a task as studied. Marking a finished task again is a no-op.
    pub fn mark_complete(&mut self, index: usize) -> Result<&Task> {
        let slot = self.check_index(index)?;
        self.tasks[slot].done = true;
        Ok(&self.tasks[slot])
    }

    /// Record that the reminder for this task has been delivered.
    pub fn mark_reminded(&mut self, index: usize) -> Result<&Task> {
        let slot = self.check_index(index)?;
        self.tasks[slot].reminded = true;
        Ok(&self.tasks[slot])
    }

    /// Remove every task, returning how many were dropped.
    pub fn clear_all(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    fn allocate_id(&mut self) -> Result<TaskId> {
        let next = self.next_id.max(1);
        self.next_id = bump_id(next)?;
        Ok(TaskId(next))
    }

    fn check_index(&self, index: usize) -> Result<usize> {
        if self.tasks.is_empty() {
            return Err(PlannerError::Index("empty list".to_string()));
        }
        if index == 0 || index > self.tasks.len() {
            return Err(PlannerError::Index(format!(
                "{} is out of range (1-{})",
                index,
                self.tasks.len()
            )));
        }
        Ok(index - 1)
    }
}

impl<'a> IntoIterator for &'a StudyList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

/// Everything the planner persists: the user's name and their study list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerState {
    #[serde(default)]
    pub user_name: String,

    #[serde(default)]
    pub study_list: StudyList,
}

impl PlannerState {
    pub fn new() -> Self {
        Self {
            user_name: String::new(),
            study_list: StudyList::new(),
        }
    }

    pub fn set_user_name(&mut self, name: &str) -> Result<()> {
        self.user_name = validation::validate_name(name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 10).unwrap() + chrono::Duration::days(offset)
    }

    fn list_with(names: &[&str]) -> StudyList {
        let mut list = StudyList::new();
        for name in names {
            list.add(name, Priority::Medium, day(1), None).unwrap();
        }
        list
    }

    #[test]
    fn test_add_appends_with_defaults() {
        let mut list = StudyList::new();
        let task = list
            .add("  Chemistry exam ", Priority::High, day(3), Some(" me@example.com "))
            .unwrap();
        assert_eq!(task.name, "Chemistry exam");
        assert_eq!(task.user_email.as_deref(), Some("me@example.com"));
        assert!(!task.done);
        assert!(!task.reminded);
        assert_eq!(task.id, TaskId(1));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut list = StudyList::new();
        let err = list.add("   ", Priority::Low, day(0), None).unwrap_err();
        assert!(matches!(err, PlannerError::Validation(_)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_blank_email_means_no_email() {
        let mut list = StudyList::new();
        let task = list.add("Essay", Priority::Low, day(0), Some("  ")).unwrap();
        assert!(task.user_email.is_none());
    }

    #[test]
    fn test_remove_at_empty_list() {
        let mut list = StudyList::new();
        let err = list.remove_at(1).unwrap_err();
        assert!(matches!(err, PlannerError::Index(ref m) if m == "empty list"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_at_single_item() {
        let mut list = list_with(&["Only"]);
        let removed = list.remove_at(1).unwrap();
        assert_eq!(removed.name, "Only");
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut list = list_with(&["A", "B"]);
        assert!(matches!(list.remove_at(0), Err(PlannerError::Index(_))));
        assert!(matches!(list.remove_at(3), Err(PlannerError::Index(_))));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut list = list_with(&["A", "B"]);
        list.remove_at(2).unwrap();
        let task = list.add("C", Priority::Low, day(0), None).unwrap();
        assert_eq!(task.id, TaskId(3));
    }

    #[test]
    fn test_resolve_position_and_id() {
        let mut list = list_with(&["A", "B", "C"]);
        list.remove_at(1).unwrap();
        assert_eq!(list.resolve(TaskRef::Id(TaskId(3))).unwrap(), 2);
        assert_eq!(list.resolve(TaskRef::Position(1)).unwrap(), 1);
        assert!(list.resolve(TaskRef::Id(TaskId(1))).is_err());
        assert!(list.resolve(TaskRef::Position(3)).is_err());
    }

    #[test]
    fn test_task_ref_parsing() {
        assert_eq!("3".parse::<TaskRef>().unwrap(), TaskRef::Position(3));
        assert_eq!("#12".parse::<TaskRef>().unwrap(), TaskRef::Id(TaskId(12)));
        assert!("#0".parse::<TaskRef>().is_err());
        assert!("three".parse::<TaskRef>().is_err());
    }

    #[test]
    fn test_edit_blank_name_is_rejected_without_mutation() {
        let mut list = list_with(&["Original"]);
        let err = list.edit_field(1, FieldEdit::Name("  ".to_string())).unwrap_err();
        assert!(matches!(err, PlannerError::Validation(_)));
        assert_eq!(list.get(1).unwrap().name, "Original");
    }

    #[test]
    fn test_edit_priority_and_due_date() {
        let mut list = list_with(&["Essay"]);
        list.edit_field(1, FieldEdit::Priority(Priority::High)).unwrap();
        list.edit_field(1, FieldEdit::DueDate(day(7))).unwrap();
        let task = list.get(1).unwrap();
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date().unwrap(), day(7));
    }

    #[test]
    fn test_changing_email_rearms_reminder() {
        let mut list = StudyList::new();
        list.add("Essay", Priority::Low, day(1), Some("old@example.com")).unwrap();
        list.mark_reminded(1).unwrap();

        list.edit_field(1, FieldEdit::Email(Some("new@example.com".to_string())))
            .unwrap();
        let task = list.get(1).unwrap();
        assert!(!task.reminded);
        assert_eq!(task.user_email.as_deref(), Some("new@example.com"));
    }

    #[test]
    fn test_same_email_keeps_reminded() {
        let mut list = StudyList::new();
        list.add("Essay", Priority::Low, day(1), Some("me@example.com")).unwrap();
        list.mark_reminded(1).unwrap();

        list.edit_field(1, FieldEdit::Email(Some(" me@example.com ".to_string())))
            .unwrap();
        assert!(list.get(1).unwrap().reminded);
    }

    #[test]
    fn test_mark_complete_is_idempotent() {
        let mut list = list_with(&["Essay"]);
        assert!(list.mark_complete(1).unwrap().done);
        assert!(list.mark_complete(1).unwrap().done);
    }

    #[test]
    fn test_clear_all() {
        let mut list = list_with(&["A", "B", "C"]);
        assert_eq!(list.clear_all(), 3);
        assert!(list.is_empty());
    }

    #[test]
    fn test_loading_assigns_missing_and_duplicate_ids() {
        let json = r#"[
            {"name":"A","priority":1,"due_date":"2025-01-01"},
            {"id":4,"name":"B","priority":2,"due_date":"2025-01-02"},
            {"id":4,"name":"C","priority":3,"due_date":"2025-01-03"}
        ]"#;
        let mut list: StudyList = serde_json::from_str(json).unwrap();
        let ids: Vec<_> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(5), TaskId(4), TaskId(6)]);

        let task = list.add("D", Priority::Low, day(0), None).unwrap();
        assert_eq!(task.id, TaskId(7));
    }

    #[test]
    fn test_loading_rejects_exhausted_id_space() {
        let json = r#"[{"id":4294967295,"name":"A","priority":1,"due_date":"2025-01-01"}]"#;
        assert!(serde_json::from_str::<StudyList>(json).is_err());
    }

    #[test]
    fn test_add_fails_when_ids_run_out() {
        let json = r#"[{"id":4294967294,"name":"A","priority":1,"due_date":"2025-01-01"}]"#;
        let mut list: StudyList = serde_json::from_str(json).unwrap();
        let before = list.clone();
        assert!(matches!(
            list.add("B", Priority::Low, day(0), None),
            Err(PlannerError::Validation(_))
        ));
        assert_eq!(list, before);
    }

    #[test]
    fn test_set_user_name() {
        let mut state = PlannerState::new();
        state.set_user_name("  Ada ").unwrap();
        assert_eq!(state.user_name, "Ada");
        assert!(state.set_user_name(" ").is_err());
        assert_eq!(state.user_name, "Ada");
    }
}
