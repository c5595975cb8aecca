//! Task List Controller
//!
//! Sequences each remote operation with its mirror update. The mirror is only
//! touched after the remote call succeeded.

use crate::commands::{ApiResult, TaskApi};
use crate::models::{Filter, Task, TaskDraft, TaskId};
use crate::store::Mirror;

pub struct TaskController<A, M> {
    api: A,
    mirror: M,
}

impl<A: TaskApi, M: Mirror> TaskController<A, M> {
    pub fn new(api: A, mirror: M) -> Self {
        Self { api, mirror }
    }

    /// Re-fetch the current filter and replace the mirror
    pub async fn refresh(&self) -> ApiResult<()> {
        let filter = self.mirror.modify(|state| state.filter);
        self.fetch(filter).await
    }

    /// Fetch `filter`; the mirror switches over only once the list arrives
    pub async fn select_filter(&self, filter: Filter) -> ApiResult<()> {
        self.fetch(filter).await
    }

    async fn fetch(&self, filter: Filter) -> ApiResult<()> {
        let ticket = self.mirror.modify(|state| state.begin_fetch(filter));
        let tasks = self.api.list(filter).await.inspect_err(|err| {
            tracing::error!(filter = %filter, error = %err, "fetching tasks failed");
        })?;

        let count = tasks.len();
        if self.mirror.modify(|state| state.apply_fetch(ticket, tasks)) {
            tracing::info!(filter = %filter, count, "tasks loaded");
        } else {
            tracing::debug!(filter = %filter, generation = ticket.generation, "stale task list discarded");
        }
        Ok(())
    }

    /// Create a task, then re-fetch since it may not match the current filter.
    /// A failed re-fetch leaves the mirror stale but the create still succeeded.
    pub async fn create(&self, draft: &TaskDraft) -> ApiResult<Task> {
        let created = self.api.create(draft).await.inspect_err(|err| {
            tracing::error!(error = %err, "creating task failed");
        })?;
        tracing::info!(id = created.id, "task created");
        if self.refresh().await.is_err() {
            tracing::warn!(id = created.id, "task list not reloaded after create");
        }
        Ok(created)
    }

    pub async fn edit(&self, id: TaskId, draft: &TaskDraft) -> ApiResult<()> {
        self.api.update(id, draft).await.inspect_err(|err| {
            tracing::error!(id, error = %err, "editing task failed");
        })?;
        self.mirror.modify(|state| state.patch_text(id, draft));
        Ok(())
    }

    /// Flip completion; the mirror takes the server's resulting flag
    pub async fn toggle_active(&self, id: TaskId) -> ApiResult<bool> {
        let toggled = self.api.toggle_active(id).await.inspect_err(|err| {
            tracing::error!(id, error = %err, "toggling task failed");
        })?;
        self.mirror.modify(|state| state.patch_active(id, toggled.active));
        Ok(toggled.active)
    }

    pub async fn delete(&self, id: TaskId) -> ApiResult<()> {
        self.api.delete(id).await.inspect_err(|err| {
            tracing::error!(id, error = %err, "deleting task failed");
        })?;
        self.mirror.modify(|state| state.remove(id));
        tracing::info!(id, "task deleted");
        Ok(())
    }
}
