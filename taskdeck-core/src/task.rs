//! Task entity and its field types.
//!
//! A [`Task`] is the single managed entity of the system. The server assigns
//! `id` and `created_at`; everything a client may supply travels as a
//! [`TaskDraft`].

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique, server-assigned task identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a task id from its numeric value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value of this id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal priority, the default for new tasks.
    #[default]
    Medium,
    /// Needs attention soon.
    High,
}

impl Priority {
    /// Wire-format name of this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!(
                "unknown priority '{other}' (expected low, medium or high)"
            )),
        }
    }
}

/// Task category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Work-related task.
    Work,
    /// Study-related task.
    Study,
    /// Household task.
    Home,
    /// Anything else, the default for new tasks.
    #[default]
    Other,
}

impl Category {
    /// Wire-format name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Study => "study",
            Category::Home => "home",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Category::Work),
            "study" => Ok(Category::Study),
            "home" => Ok(Category::Home),
            "other" => Ok(Category::Other),
            other => Err(format!(
                "unknown category '{other}' (expected work, study, home or other)"
            )),
        }
    }
}

/// A task as stored on the server and returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned unique identifier.
    pub id: TaskId,
    /// Short task title.
    pub title: String,
    /// Free-form description, may be empty.
    pub description: String,
    /// Priority level.
    pub priority: Priority,
    /// Category the task belongs to.
    pub category: Category,
    /// Whether the task is flagged as important.
    pub important: bool,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Returns the client-editable fields of this task.
    ///
    /// Updates are full replacements, so an edit starts from the current
    /// field values and sends them all back.
    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            category: self.category,
            important: self.important,
            completed: self.completed,
        }
    }
}

/// Client-supplied task fields for create and update operations.
///
/// `id` and `created_at` never appear here; both are assigned by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Short task title.
    pub title: String,
    /// Free-form description, may be empty.
    #[serde(default)]
    pub description: String,
    /// Priority level, medium when omitted.
    #[serde(default)]
    pub priority: Priority,
    /// Category, other when omitted.
    #[serde(default)]
    pub category: Category,
    /// Whether the task is flagged as important.
    #[serde(default)]
    pub important: bool,
    /// Whether the task has been completed.
    #[serde(default)]
    pub completed: bool,
}

impl TaskDraft {
    /// Builds a full task by attaching the server-assigned fields.
    pub fn into_task(self, id: TaskId, created_at: DateTime<Utc>) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            category: self.category,
            important: self.important,
            completed: self.completed,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::from_str::<Priority>("\"medium\"").unwrap(),
            Priority::Medium
        );
    }

    #[test]
    fn test_category_round_trips_through_str() {
        for category in [
            Category::Work,
            Category::Study,
            Category::Home,
            Category::Other,
        ] {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_priority_rejects_unknown_value() {
        assert!("urgent".parse::<Priority>().is_err());
        assert!("Medium".parse::<Priority>().is_err());
    }

    #[test]
    fn test_draft_defaults_apply_to_omitted_fields() {
        let draft: TaskDraft = serde_json::from_str(r#"{"title": "Buy milk"}"#).unwrap();

        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description, "");
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.category, Category::Other);
        assert!(!draft.important);
        assert!(!draft.completed);
    }

    #[test]
    fn test_task_serializes_id_transparently() {
        let task = TaskDraft {
            title: "Read".to_string(),
            ..TaskDraft::default()
        }
        .into_task(TaskId::new(7), Utc::now());

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["priority"], "medium");
    }

    #[test]
    fn test_draft_round_trips_through_task() {
        let draft = TaskDraft {
            title: "Write report".to_string(),
            description: "quarterly numbers".to_string(),
            priority: Priority::High,
            category: Category::Work,
            important: true,
            completed: false,
        };

        let task = draft.clone().into_task(TaskId::new(1), Utc::now());
        assert_eq!(task.draft(), draft);
    }
}
