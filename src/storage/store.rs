use crate::error::{PlannerError, Result};
use crate::model::PlannerState;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The data file existed but could not be read as a planner state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorruptDataWarning {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for CorruptDataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Data file {} is corrupt ({}); starting with an empty planner",
            self.path.display(),
            self.reason
        )
    }
}

/// Result of [`PlannerStore::load`].
#[derive(Debug, Clone)]
pub struct Loaded {
    pub state: PlannerState,
    pub warning: Option<CorruptDataWarning>,
}

pub struct PlannerStore {
    path: PathBuf,
}

impl PlannerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the state from disk.
    ///
    /// A missing file yields an empty state. Malformed content yields an
    /// empty state plus a warning. Only a failed read is an error.
    pub fn load(&self) -> Result<Loaded> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No data file, starting empty");
            return Ok(Loaded {
                state: PlannerState::new(),
                warning: None,
            });
        }

        // Raw bytes, so invalid UTF-8 is reported as corrupt content
        let content = std::fs::read(&self.path)?;
        match serde_json::from_slice::<PlannerState>(&content) {
            Ok(state) => {
                tracing::debug!(
                    path = %self.path.display(),
                    tasks = state.study_list.len(),
                    "Loaded planner state"
                );
                Ok(Loaded {
                    state,
                    warning: None,
                })
            }
            Err(e) => {
                let warning = CorruptDataWarning {
                    path: self.path.clone(),
                    reason: e.to_string(),
                };
                tracing::warn!("{}", warning);
                Ok(Loaded {
                    state: PlannerState::new(),
                    warning: Some(warning),
                })
            }
        }
    }

    /// Write the full state. The previous file stays intact if this fails.
    pub fn save(&self, state: &PlannerState) -> Result<()> {
        let content = serde_json::to_string_pretty(state)?;
        self.atomic_write(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            tasks = state.study_list.len(),
            "Saved planner state"
        );
        Ok(())
    }

    /// Write to a temp file next to the target, sync it, then rename over
    /// the target.
    fn atomic_write(&self, content: &str) -> Result<()> {
        let target_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| PlannerError::Storage(format!("Failed to create temp file: {}", e)))?;

        use std::io::Write;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| PlannerError::Storage(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| PlannerError::Storage(format!("Failed to sync temp file: {}", e)))?;

        temp_file
            .persist(&self.path)
            .map_err(|e| PlannerError::Storage(format!("Failed to persist temp file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, TaskId};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn setup() -> (TempDir, PlannerStore) {
        let dir = TempDir::new().unwrap();
        let store = PlannerStore::new(dir.path().join("tasks.json"));
        (dir, store)
    }

    fn state_with(count: usize) -> PlannerState {
        let mut state = PlannerState::new();
        state.set_user_name("Ada").unwrap();
        for i in 0..count {
            state
                .study_list
                .add(
                    &format!("Task {}", i + 1),
                    Priority::ALL[i % 3],
                    day(i as u32 + 1),
                    (i % 2 == 0).then_some("ada@example.com"),
                )
                .unwrap();
        }
        state
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_dir, store) = setup();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.state, PlannerState::new());
        assert!(loaded.warning.is_none());
    }

    #[test]
    fn test_round_trip_zero_one_many() {
        let (_dir, store) = setup();
        for count in [0, 1, 5] {
            let mut state = state_with(count);
            if count > 0 {
                state.study_list.mark_complete(1).unwrap();
                state.study_list.mark_reminded(1).unwrap();
            }
            store.save(&state).unwrap();
            let loaded = store.load().unwrap();
            assert_eq!(loaded.state, state);
            assert!(loaded.warning.is_none());
        }
    }

    #[test]
    fn test_legacy_records_load_with_defaults() {
        let (_dir, store) = setup();
        std::fs::write(
            store.path(),
            r#"{"study_list":[{"name":"Old essay","priority":2,"due_date":"2024-12-01","done":true}]}"#,
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.warning.is_none());
        assert_eq!(loaded.state.user_name, "");
        let task = loaded.state.study_list.get(1).unwrap();
        assert_eq!(task.id, TaskId(1));
        assert!(task.done);
        assert!(!task.reminded);
        assert!(task.user_email.is_none());

        // Saving and reloading the upgraded record is lossless
        store.save(&loaded.state).unwrap();
        assert_eq!(store.load().unwrap().state, loaded.state);
    }

    #[test]
    fn test_corrupt_file_recovers_with_warning() {
        let (_dir, store) = setup();
        std::fs::write(store.path(), "{ not json").unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.state, PlannerState::new());
        let warning = loaded.warning.unwrap();
        assert_eq!(warning.path, store.path());
        assert!(warning.to_string().contains("corrupt"));
    }

    #[test]
    fn test_invalid_utf8_recovers_with_warning() {
        let (_dir, store) = setup();
        std::fs::write(store.path(), [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.state, PlannerState::new());
        assert!(loaded.warning.is_some());
    }

    #[test]
    fn test_exhausted_id_space_is_corrupt() {
        let (_dir, store) = setup();
        std::fs::write(
            store.path(),
            r#"{"study_list":[{"id":4294967295,"name":"x","priority":1,"due_date":"2025-01-01"}]}"#,
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.state, PlannerState::new());
        assert!(loaded.warning.unwrap().reason.contains("id"));
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let (_dir, store) = setup();
        std::fs::write(
            store.path(),
            r#"{"study_list":[{"name":"x","priority":9,"due_date":"2025-01-01"}]}"#,
        )
        .unwrap();
        assert!(store.load().unwrap().warning.is_some());
    }

    #[test]
    fn test_save_overwrites_and_leaves_no_temp_files() {
        let (dir, store) = setup();
        store.save(&state_with(3)).unwrap();
        store.save(&state_with(1)).unwrap();

        assert_eq!(store.load().unwrap().state.study_list.len(), 1);
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = PlannerStore::new(dir.path().join("missing").join("tasks.json"));
        let err = store.save(&state_with(1)).unwrap_err();
        assert!(matches!(err, PlannerError::Storage(_)));
    }
}
