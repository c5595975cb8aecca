//! Frontend Models
//!
//! Data structures matching the task REST backend.

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier
pub type TaskId = u64;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// `true` until the task is completed
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Task {
    /// Whether this task belongs in a list scoped to `filter`
    pub fn matches(&self, filter: Filter) -> bool {
        match filter {
            Filter::All => true,
            Filter::Active => self.active,
            Filter::Completed => !self.active,
        }
    }
}

fn default_true() -> bool {
    true
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unsaved title/description pair edited in the task form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Seed a draft from an existing task
    pub fn from_task(task: &Task) -> Self {
        Self::new(task.title.clone(), task.description.clone())
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Description => self.description = value,
        }
    }
}

/// Editable task fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
}

/// List view selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Backend resource path listing tasks for this filter
    pub fn path(&self) -> &'static str {
        match self {
            Filter::All => "/tasks",
            Filter::Active => "/tasks/active",
            Filter::Completed => "/tasks/completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        })
    }
}

/// List endpoint body: either a bare array or a paginated envelope
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TaskListResponse {
    Bare(Vec<Task>),
    Page { content: Vec<Task> },
}

impl TaskListResponse {
    pub fn into_tasks(self) -> Vec<Task> {
        match self {
            TaskListResponse::Bare(tasks) => tasks,
            TaskListResponse::Page { content } => content,
        }
    }
}
