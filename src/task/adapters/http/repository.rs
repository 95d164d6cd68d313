//! `reqwest`-backed task repository.

use async_trait::async_trait;
use reqwest::Client;

use super::response::{FailureMapping, decode, ensure_success};
use crate::config::ClientConfig;
use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskPatch, TaskQuery},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Task repository talking JSON to the remote task service.
#[derive(Debug, Clone)]
pub struct HttpTaskRepository {
    client: Client,
    base_url: String,
}

impl HttpTaskRepository {
    /// Builds a repository with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Transport`] when the HTTP client
    /// cannot be constructed.
    pub fn new(config: &ClientConfig) -> TaskRepositoryResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(TaskRepositoryError::transport)?;
        Ok(Self::with_client(client, config))
    }

    /// Builds a repository around an existing HTTP client.
    #[must_use]
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url().to_owned(),
        }
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn item_url(&self, id: TaskId) -> String {
        format!("{}/tasks/{id}", self.base_url)
    }
}

#[async_trait]
impl TaskRepository for HttpTaskRepository {
    async fn list(&self, query: TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        let url = self.collection_url();
        tracing::debug!(%url, ?query, "listing tasks");
        let mut request = self.client.get(url);
        let pairs = query.query_pairs();
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }
        let response = request.send().await.map_err(TaskRepositoryError::transport)?;
        decode(response, FailureMapping::Read).await
    }

    async fn get(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let url = self.item_url(id);
        tracing::debug!(%url, task_id = %id, "fetching task");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TaskRepositoryError::transport)?;
        decode(response, FailureMapping::Read).await
    }

    async fn create(&self, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        let url = self.collection_url();
        tracing::debug!(%url, title = draft.title(), "creating task");
        let response = self
            .client
            .post(url)
            .json(&draft)
            .send()
            .await
            .map_err(TaskRepositoryError::transport)?;
        decode(response, FailureMapping::Submit).await
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task> {
        let url = self.item_url(id);
        tracing::debug!(%url, task_id = %id, "updating task");
        let response = self
            .client
            .put(url)
            .json(&patch)
            .send()
            .await
            .map_err(TaskRepositoryError::transport)?;
        decode(response, FailureMapping::Submit).await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let url = self.item_url(id);
        tracing::debug!(%url, task_id = %id, "deleting task");
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(TaskRepositoryError::transport)?;
        ensure_success(response, FailureMapping::Bare).await?;
        Ok(())
    }
}
