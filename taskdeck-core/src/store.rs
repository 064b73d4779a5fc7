//! File-backed task store.
//!
//! Tasks persist as a pretty-printed JSON array so the data file stays
//! readable by hand. Every mutation rereads the file, applies the change,
//! and rewrites it; the caller is responsible for serializing mutations
//! (the server keeps the store behind an `RwLock`).

use std::io;
use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;
use tokio::fs;
use tracing::debug;

use crate::task::{Task, TaskDraft, TaskId};

/// Errors that can occur during task store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No task with the requested id exists.
    #[error("Task {id} not found")]
    TaskNotFound {
        /// The id that was looked up
        id: TaskId,
    },

    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The data file holds malformed JSON.
    #[error("Data file corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}

/// JSON-file-backed store of the task collection.
#[derive(Debug, Clone)]
pub struct TaskStore {
    data_file: PathBuf,
}

impl TaskStore {
    /// Creates a store backed by the given data file.
    ///
    /// The file is created on first write; a missing or empty file reads as
    /// an empty task list.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Returns every stored task.
    ///
    /// # Errors
    ///
    /// - `StoreError::Io` - Failed to read the data file
    /// - `StoreError::Corrupted` - Data file holds malformed JSON
    pub async fn all(&self) -> Result<Vec<Task>, StoreError> {
        self.read_all().await
    }

    /// Returns the task with the given id.
    ///
    /// # Errors
    ///
    /// - `StoreError::TaskNotFound` - No task with this id exists
    pub async fn find(&self, id: TaskId) -> Result<Task, StoreError> {
        let tasks = self.read_all().await?;
        tasks
            .into_iter()
            .find(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound { id })
    }

    /// Stores a new task, assigning its id and creation timestamp.
    ///
    /// Ids are assigned as `max(existing) + 1`, starting from 1 on an empty
    /// store.
    ///
    /// # Errors
    ///
    /// - `StoreError::Io` - Failed to read or write the data file
    pub async fn insert(&mut self, draft: TaskDraft) -> Result<Task, StoreError> {
        let mut tasks = self.read_all().await?;

        let task = draft.into_task(Self::next_id(&tasks), Utc::now());
        tasks.push(task.clone());
        self.write_all(&tasks).await?;

        Ok(task)
    }

    /// Replaces the task with the given id.
    ///
    /// The stored `id` and `created_at` are preserved; every other field is
    /// taken from the draft.
    ///
    /// # Errors
    ///
    /// - `StoreError::TaskNotFound` - No task with this id exists
    /// - `StoreError::Io` - Failed to read or write the data file
    pub async fn replace(&mut self, id: TaskId, draft: TaskDraft) -> Result<Task, StoreError> {
        let mut tasks = self.read_all().await?;

        let slot = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound { id })?;
        let updated = draft.into_task(id, slot.created_at);
        *slot = updated.clone();
        self.write_all(&tasks).await?;

        Ok(updated)
    }

    /// Deletes the task with the given id.
    ///
    /// # Errors
    ///
    /// - `StoreError::TaskNotFound` - No task with this id exists
    /// - `StoreError::Io` - Failed to read or write the data file
    pub async fn remove(&mut self, id: TaskId) -> Result<(), StoreError> {
        let mut tasks = self.read_all().await?;

        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            return Err(StoreError::TaskNotFound { id });
        }
        self.write_all(&tasks).await?;

        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<Task>, StoreError> {
        let text = match fs::read_to_string(&self.data_file).await {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        // An existing but empty file also reads as an empty list.
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn write_all(&self, tasks: &[Task]) -> Result<(), StoreError> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let text = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.data_file, text).await?;

        debug!(
            count = tasks.len(),
            file = %self.data_file.display(),
            "persisted task list"
        );
        Ok(())
    }

    fn next_id(tasks: &[Task]) -> TaskId {
        let max = tasks.iter().map(|task| task.id.as_u64()).max().unwrap_or(0);
        TaskId::new(max + 1)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::task::Priority;

    fn store_in(dir: &TempDir) -> TaskStore {
        TaskStore::new(dir.path().join("tasks.json"))
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            ..TaskDraft::default()
        }
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("tasks.json"), "  \n").unwrap();
        let store = store_in(&dir);

        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let first = store.insert(draft("first")).await.unwrap();
        let second = store.insert(draft("second")).await.unwrap();

        assert_eq!(first.id, TaskId::new(1));
        assert_eq!(second.id, TaskId::new(2));
    }

    #[tokio::test]
    async fn test_next_id_follows_the_maximum() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let first = store.insert(draft("keep")).await.unwrap();
        let second = store.insert(draft("drop")).await.unwrap();
        store.remove(first.id).await.unwrap();

        // max(existing) + 1, regardless of gaps left by deletions
        let third = store.insert(draft("next")).await.unwrap();
        assert_eq!(third.id.as_u64(), second.id.as_u64() + 1);
    }

    #[tokio::test]
    async fn test_replace_preserves_id_and_created_at() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let original = store.insert(draft("original")).await.unwrap();
        let updated = store
            .replace(
                original.id,
                TaskDraft {
                    title: "updated".to_string(),
                    priority: Priority::High,
                    completed: true,
                    ..TaskDraft::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.title, "updated");
        assert!(updated.completed);

        let fetched = store.find(original.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_replace_missing_task_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let result = store.replace(TaskId::new(99), draft("ghost")).await;
        assert!(matches!(
            result,
            Err(StoreError::TaskNotFound { id }) if id == TaskId::new(99)
        ));
    }

    #[tokio::test]
    async fn test_remove_then_find_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let task = store.insert(draft("short-lived")).await.unwrap();
        store.remove(task.id).await.unwrap();

        assert!(matches!(
            store.find(task.id).await,
            Err(StoreError::TaskNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_remove_missing_task_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        assert!(store.remove(TaskId::new(1)).await.is_err());
    }

    #[tokio::test]
    async fn test_data_file_is_readable_json() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.insert(draft("inspect me")).await.unwrap();

        let text = std::fs::read_to_string(dir.path().join("tasks.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value[0]["title"], "inspect me");
        // Pretty-printed so the file can be inspected by hand.
        assert!(text.contains('\n'));
    }

    #[tokio::test]
    async fn test_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let task = {
            let mut store = store_in(&dir);
            store.insert(draft("durable")).await.unwrap()
        };

        let reopened = store_in(&dir);
        assert_eq!(reopened.find(task.id).await.unwrap(), task);
    }
}
