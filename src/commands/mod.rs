//! Task Backend Bindings
//!
//! Async access to the task REST resource. The UI talks to the `TaskApi`
//! trait; `HttpTaskApi` is the browser implementation.

mod task;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Filter, Task, TaskDraft, TaskId};

pub use task::HttpTaskApi;

/// Uniform failure of any backend call
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },
    #[error("{method} {path} returned HTTP {status}")]
    Status {
        method: reqwest::Method,
        path: String,
        status: u16,
    },
    #[error("unexpected response from {path}: {message}")]
    Decode { path: String, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Remote task operations. No retries; failures are returned, never swallowed.
#[async_trait(?Send)]
pub trait TaskApi {
    /// Fetch every task visible under `filter`
    async fn list(&self, filter: Filter) -> ApiResult<Vec<Task>>;

    /// Create a task; the server assigns the id
    async fn create(&self, draft: &TaskDraft) -> ApiResult<Task>;

    /// Replace title and description of an existing task
    async fn update(&self, id: TaskId, draft: &TaskDraft) -> ApiResult<()>;

    /// Flip completion server-side and return the resulting task
    async fn toggle_active(&self, id: TaskId) -> ApiResult<Task>;

    async fn delete(&self, id: TaskId) -> ApiResult<()>;
}
