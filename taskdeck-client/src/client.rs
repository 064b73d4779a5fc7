//! HTTP request wrappers for the remote task collection.
//!
//! One method per API operation, each an independent asynchronous call that
//! unwraps the response body and nothing else. Error handling, retries, and
//! user-visible reporting are left entirely to the caller.

use taskdeck_core::config::{ApiBase, ApiConfig};
use taskdeck_core::{Task, TaskDraft, TaskId};

use crate::Result;

/// Client for the remote task collection at `/api/tasks`.
///
/// Holds a single `reqwest::Client` configured with the base address and a
/// fixed per-request timeout. Cloning is cheap and shares the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct TaskApi {
    client: reqwest::Client,
    base: ApiBase,
}

impl TaskApi {
    /// Creates a client from the given API configuration.
    ///
    /// # Errors
    ///
    /// - `ApiError` - The underlying HTTP client could not be built
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base: config.base,
        })
    }

    /// Creates a client configured from the environment.
    ///
    /// Reads the base address override from `TASKDECK_API_URL`; an unset
    /// variable selects the development default and an empty one selects
    /// same-origin requests.
    ///
    /// # Errors
    ///
    /// - `ApiError` - The underlying HTTP client could not be built
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env())
    }

    /// Fetches every task in the collection.
    ///
    /// # Errors
    ///
    /// - `ApiError` - Request failed or the response body could not be decoded
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let response = self.client.get(self.url("/api/tasks")).send().await?;
        Ok(response.error_for_status()?.json().await?)
    }

    /// Fetches a single task by id.
    ///
    /// # Errors
    ///
    /// - `ApiError` - Request failed, the task does not exist, or the
    ///   response body could not be decoded
    pub async fn task(&self, id: TaskId) -> Result<Task> {
        let response = self
            .client
            .get(self.url(&format!("/api/tasks/{id}")))
            .send()
            .await?;
        Ok(response.error_for_status()?.json().await?)
    }

    /// Creates a new task and returns it as stored by the server.
    ///
    /// The draft carries no `id` or `created_at`; both come back assigned.
    ///
    /// # Errors
    ///
    /// - `ApiError` - Request failed or the response body could not be decoded
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task> {
        let response = self
            .client
            .post(self.url("/api/tasks"))
            .json(draft)
            .send()
            .await?;
        Ok(response.error_for_status()?.json().await?)
    }

    /// Replaces the task with the given id and returns the stored result.
    ///
    /// Updates are full replacements; the draft supplies every editable
    /// field.
    ///
    /// # Errors
    ///
    /// - `ApiError` - Request failed, the task does not exist, or the
    ///   response body could not be decoded
    pub async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> Result<Task> {
        let response = self
            .client
            .put(self.url(&format!("/api/tasks/{id}")))
            .json(draft)
            .send()
            .await?;
        Ok(response.error_for_status()?.json().await?)
    }

    /// Deletes the task with the given id.
    ///
    /// # Errors
    ///
    /// - `ApiError` - Request failed or the task does not exist
    pub async fn delete_task(&self, id: TaskId) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/tasks/{id}")))
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        self.base.join(path)
    }
}
