//! Task Commands
//!
//! HTTP implementation of `TaskApi` against the `/tasks` resource.

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, TaskApi};
use crate::config::ApiConfig;
use crate::models::{Filter, Task, TaskDraft, TaskId, TaskListResponse};

const TASKS_PATH: &str = "/tasks";

fn task_path(id: TaskId) -> String {
    format!("{}/{}", TASKS_PATH, id)
}

fn toggle_path(id: TaskId) -> String {
    format!("{}/{}/toggle", TASKS_PATH, id)
}

/// Parse a JSON response body
fn decode<T: DeserializeOwned>(path: &str, body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// `TaskApi` over HTTP via reqwest (fetch in the browser)
#[derive(Clone, Debug)]
pub struct HttpTaskApi {
    client: Client,
    config: ApiConfig,
}

impl HttpTaskApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn send(&self, method: Method, path: &str, body: Option<&TaskDraft>) -> ApiResult<Response> {
        tracing::debug!(%method, path, "task request");

        let mut request = self.client.request(method.clone(), self.config.url(path));
        if let Some(draft) = body {
            request = request.json(draft);
        }

        let response = request.send().await.map_err(|e| ApiError::Transport {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&TaskDraft>,
    ) -> ApiResult<T> {
        let response = self.send(method, path, body).await?;
        let text = response.text().await.map_err(|e| ApiError::Transport {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        decode(path, &text)
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list(&self, filter: Filter) -> ApiResult<Vec<Task>> {
        let body: TaskListResponse = self.send_json(Method::GET, filter.path(), None).await?;
        Ok(body.into_tasks())
    }

    async fn create(&self, draft: &TaskDraft) -> ApiResult<Task> {
        self.send_json(Method::POST, TASKS_PATH, Some(draft)).await
    }

    async fn update(&self, id: TaskId, draft: &TaskDraft) -> ApiResult<()> {
        self.send(Method::PUT, &task_path(id), Some(draft)).await?;
        Ok(())
    }

    async fn toggle_active(&self, id: TaskId) -> ApiResult<Task> {
        self.send_json(Method::PATCH, &toggle_path(id), None).await
    }

    async fn delete(&self, id: TaskId) -> ApiResult<()> {
        self.send(Method::DELETE, &task_path(id), None).await?;
        Ok(())
    }
}
