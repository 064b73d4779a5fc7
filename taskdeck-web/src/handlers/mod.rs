//! HTTP request handlers for the task API.

pub mod api;

// Re-export handler functions
pub use api::{create_task, delete_task, get_task, list_tasks, update_task};
