//! Fake task service serving the in-memory repository over HTTP.

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use taskboard::{
    config::ClientConfig,
    task::{
        adapters::{http::HttpTaskRepository, memory::InMemoryTaskRepository},
        domain::{SortKey, Task, TaskDraft, TaskId, TaskPatch, TaskQuery, TaskStatus},
        ports::{TaskRepository, TaskRepositoryError},
    },
};
use tokio::{net::TcpListener, task::JoinHandle};

/// A running fake service; stops when dropped.
pub struct FakeService {
    pub store: InMemoryTaskRepository,
    base: String,
    handle: JoinHandle<()>,
}

impl FakeService {
    /// Starts a service on an ephemeral local port.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound.
    pub async fn start(store: InMemoryTaskRepository) -> Result<Self, eyre::Report> {
        let router = Router::new()
            .route("/api/tasks", get(list_tasks).post(create_task))
            .route(
                "/api/tasks/{id}",
                get(get_task).put(update_task).delete(delete_task),
            )
            .route("/broken/tasks", get(fail_empty).post(fail_empty))
            .route("/broken/tasks/{id}", get(not_json).put(reject_empty))
            .with_state(store.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base = format!("http://{}", listener.local_addr()?);
        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, router).await {
                tracing::error!(error = %err, "fake task service stopped");
            }
        });
        Ok(Self {
            store,
            base,
            handle,
        })
    }

    /// Base URL of the well-behaved API.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("{}/api", self.base)
    }

    /// Base URL of routes that fail without a usable body.
    #[must_use]
    pub fn broken_url(&self) -> String {
        format!("{}/broken", self.base)
    }
}

impl Drop for FakeService {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Builds an HTTP repository for `base_url`.
///
/// # Errors
///
/// Returns an error if the URL or client is rejected.
pub fn client_for(base_url: &str) -> Result<HttpTaskRepository, eyre::Report> {
    let config = ClientConfig::new(base_url)?;
    Ok(HttpTaskRepository::new(&config)?)
}

/// Returns a base URL nothing is listening on.
///
/// # Errors
///
/// Returns an error if no port can be reserved.
pub async fn unreachable_url() -> Result<String, eyre::Report> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}/api"))
}

struct ServiceError(TaskRepositoryError);

impl From<TaskRepositoryError> for ServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self
            .0
            .status()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::SERVICE_UNAVAILABLE);
        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
}

async fn list_tasks(
    State(store): State<InMemoryTaskRepository>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut query = TaskQuery::new();
    if let Some(raw) = params.get("status") {
        match raw.parse::<TaskStatus>() {
            Ok(status) => query = query.with_status(status),
            Err(err) => return bad_request(err.to_string()),
        }
    }
    if let Some(raw) = params.get("sort") {
        match raw.parse::<SortKey>() {
            Ok(sort) => query = query.with_sort(sort),
            Err(err) => return bad_request(err.to_string()),
        }
    }
    match store.list(query).await {
        Ok(tasks) => Json(tasks).into_response(),
        Err(err) => ServiceError(err).into_response(),
    }
}

async fn get_task(
    State(store): State<InMemoryTaskRepository>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ServiceError> {
    Ok(Json(store.get(TaskId::new(id)).await?))
}

async fn create_task(
    State(store): State<InMemoryTaskRepository>,
    Json(draft): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>), ServiceError> {
    let task = store.create(draft).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn update_task(
    State(store): State<InMemoryTaskRepository>,
    Path(id): Path<i64>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, ServiceError> {
    Ok(Json(store.update(TaskId::new(id), patch).await?))
}

async fn delete_task(
    State(store): State<InMemoryTaskRepository>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    store.delete(TaskId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn fail_empty() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn reject_empty() -> StatusCode {
    StatusCode::UNPROCESSABLE_ENTITY
}

async fn not_json() -> &'static str {
    "definitely not a task"
}
