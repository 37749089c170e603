//! Load/save/mutate logic over the on-disk task collection.
//!
//! Every operation is one load, compute, optional save cycle against the
//! backing file; nothing is cached between invocations. Read and write
//! failures degrade to an empty collection or a skipped write rather than
//! aborting the process.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::error::StoreError;
use crate::task::{Priority, Task, DEFAULT_STATUS};

#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full task collection from the backing file.
    ///
    /// A missing file is an empty collection, not an error. Corrupt or
    /// unreadable data is logged and also yields an empty collection; prior
    /// contents are then lost on the next save.
    pub fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            info!(file = %self.path.display(), "task file not found, starting with empty list");
            return Vec::new();
        }
        match self.read_tasks() {
            Ok(tasks) => {
                debug!(file = %self.path.display(), count = tasks.len(), "tasks loaded");
                tasks
            }
            Err(StoreError::Parse(err)) => {
                error!(file = %self.path.display(), %err, "error decoding task file, returning empty list");
                Vec::new()
            }
            Err(err) => {
                error!(file = %self.path.display(), %err, "unexpected error loading tasks");
                Vec::new()
            }
        }
    }

    /// Entries that do not decode into the task model are skipped with a
    /// warning and will not survive the next save.
    fn read_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let data = fs::read_to_string(&self.path)?;
        let entries: Vec<serde_json::Value> = serde_json::from_str(&data)?;
        let mut tasks = Vec::with_capacity(entries.len());
        for entry in entries {
            match serde_json::from_value(entry) {
                Ok(task) => tasks.push(task),
                Err(err) => {
                    warn!(file = %self.path.display(), %err, "skipping entry that is not a valid task");
                }
            }
        }
        Ok(tasks)
    }

    /// Writes the full collection back, overwriting prior contents.
    ///
    /// Failure to write is logged and swallowed; callers cannot observe it.
    pub fn save(&self, tasks: &[Task]) {
        let json = match serde_json::to_string_pretty(tasks) {
            Ok(json) => json,
            Err(err) => {
                error!(%err, "could not serialize tasks");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            error!(file = %self.path.display(), %err, "could not write task file");
        } else {
            debug!(file = %self.path.display(), count = tasks.len(), "tasks saved");
        }
    }

    /// Appends a new task with the next free id and persists the collection.
    ///
    /// Rejects an empty description without touching the backing file.
    pub fn add(&self, description: &str, priority: Priority) -> Result<Task, StoreError> {
        if description.is_empty() {
            warn!("attempted to add a task with no description");
            return Err(StoreError::EmptyDescription);
        }

        let mut tasks = self.load();
        let task = Task {
            id: next_id(&tasks),
            description: description.to_string(),
            priority,
            status: DEFAULT_STATUS.to_string(),
        };
        tasks.push(task.clone());
        self.save(&tasks);
        info!(id = task.id, description = %task.description, priority = %task.priority, "task added");
        Ok(task)
    }

    /// Returns every stored task, in file order.
    pub fn list(&self) -> Vec<Task> {
        let tasks = self.load();
        info!(count = tasks.len(), "listing tasks");
        tasks
    }

    /// Removes every task whose id matches.
    ///
    /// Returns false and skips the write when nothing matched.
    pub fn delete(&self, id: u32) -> bool {
        let tasks = self.load();
        let before = tasks.len();
        let remaining: Vec<Task> = tasks.into_iter().filter(|task| task.id != id).collect();
        if remaining.len() == before {
            warn!(id, "attempted to delete non-existent task");
            return false;
        }
        self.save(&remaining);
        info!(id, "task deleted");
        true
    }
}

/// Next free id: one past the highest assigned so far, starting at 1.
fn next_id(tasks: &[Task]) -> u32 {
    tasks.iter().map(|task| task.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, TaskStore) {
        let dir = TempDir::new().expect("temp dir");
        let store = TaskStore::new(dir.path().join("tasks.json"));
        (dir, store)
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_invalid_json_returns_empty() {
        let (_dir, store) = temp_store();
        for contents in ["", "invalid json", "{\"id\": 1}"] {
            fs::write(store.path(), contents).unwrap();
            assert!(store.load().is_empty(), "contents: {contents:?}");
        }
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let (_dir, store) = temp_store();
        let a = store.add("Task A", Priority::Low).unwrap();
        let b = store.add("Task B", Priority::Normal).unwrap();
        let c = store.add("Task C", Priority::High).unwrap();
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));

        let tasks = store.load();
        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(|task| task.status == DEFAULT_STATUS));
    }

    #[test]
    fn add_rejects_empty_description() {
        let (_dir, store) = temp_store();
        let err = store.add("", Priority::High).unwrap_err();
        assert!(matches!(err, StoreError::EmptyDescription));
        assert!(!store.path().exists());
    }

    #[test]
    fn next_id_is_max_plus_one_not_len_plus_one() {
        let (_dir, store) = temp_store();
        store.add("first", Priority::Normal).unwrap();
        store.add("second", Priority::Normal).unwrap();
        assert!(store.delete(1));

        let third = store.add("third", Priority::Normal).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn invalid_entries_are_skipped_on_load() {
        let (_dir, store) = temp_store();
        let contents = r#"[
            {"id": "nope", "description": "broken", "priority": "low", "status": "pending"},
            {"description": "missing id"},
            {"id": 4, "description": "valid", "priority": "high", "status": "pending"}
        ]"#;
        fs::write(store.path(), contents).unwrap();

        let tasks = store.load();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 4);

        let next = store.add("after cleanup", Priority::Normal).unwrap();
        assert_eq!(next.id, 5);
    }

    #[test]
    fn delete_existing_task() {
        let (_dir, store) = temp_store();
        store.add("Delete Me", Priority::Low).unwrap();
        store.add("Keep Me", Priority::High).unwrap();

        assert!(store.delete(1));

        let tasks = store.load();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 2);
        assert_eq!(tasks[0].description, "Keep Me");
    }

    #[test]
    fn delete_missing_id_leaves_collection_unchanged() {
        let (_dir, store) = temp_store();
        store.add("Existing Task", Priority::Normal).unwrap();
        let before = store.load();

        assert!(!store.delete(99));
        assert_eq!(store.load(), before);
    }

    #[test]
    fn delete_only_task_leaves_empty_collection() {
        let (_dir, store) = temp_store();
        store.add("Only Task", Priority::Normal).unwrap();

        assert!(store.delete(1));
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_load_round_trip() {
        let (_dir, store) = temp_store();
        let tasks = vec![
            Task {
                id: 7,
                description: "write report".into(),
                priority: Priority::High,
                status: "pending".into(),
            },
            Task {
                id: 12,
                description: "water plants".into(),
                priority: Priority::Low,
                status: "done".into(),
            },
        ];

        store.save(&tasks);
        assert_eq!(store.load(), tasks);
    }

    #[test]
    fn list_returns_tasks_in_file_order() {
        let (_dir, store) = temp_store();
        store.add("List Task 1", Priority::Normal).unwrap();
        store.add("List Task 2", Priority::Normal).unwrap();

        let tasks = store.list();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description, "List Task 1");
        assert_eq!(tasks[1].description, "List Task 2");
    }
}
