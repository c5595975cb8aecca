//! Task List Store
//!
//! The client-side mirror of server tasks for the active filter, exposed to
//! the UI through Leptos reactive_stores.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Task, TaskDraft, TaskId};

/// Issued when a list fetch starts; only the latest ticket may land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    /// Filter the fetch was requested for
    pub filter: Filter,
}

/// Mirror of the server's task list for the current filter
#[derive(Clone, Debug, Default, Store)]
pub struct TaskState {
    /// Tasks in server order, unique by id
    pub tasks: Vec<Task>,
    /// Filter the current tasks were fetched for
    pub filter: Filter,
    /// Last issued fetch generation
    pub generation: u64,
}

impl TaskState {
    /// Start a fetch for `filter`; the filter itself only moves on `apply_fetch`
    pub fn begin_fetch(&mut self, filter: Filter) -> FetchTicket {
        self.generation += 1;
        FetchTicket {
            generation: self.generation,
            filter,
        }
    }

    /// Replace the mirror wholesale and adopt the ticket's filter.
    /// Stale tickets are discarded.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, tasks: Vec<Task>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        let mut seen = HashSet::with_capacity(tasks.len());
        self.tasks = tasks.into_iter().filter(|task| seen.insert(task.id)).collect();
        self.filter = ticket.filter;
        true
    }

    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Patch title/description in place
    pub fn patch_text(&mut self, id: TaskId, draft: &TaskDraft) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.title = draft.title.clone();
                task.description = draft.description.clone();
                true
            }
            None => false,
        }
    }

    /// Patch the completion flag; a task that leaves the current filter is dropped
    pub fn patch_active(&mut self, id: TaskId, active: bool) -> bool {
        let filter = self.filter;
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.active = active;
        if !task.matches(filter) {
            self.remove(id);
        }
        true
    }
}

/// Type alias for the store
pub type TaskStore = Store<TaskState>;

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

/// Write access to a task mirror, reactive or plain
pub trait Mirror {
    fn modify<R>(&self, f: impl FnOnce(&mut TaskState) -> R) -> R;
}

impl Mirror for TaskStore {
    fn modify<R>(&self, f: impl FnOnce(&mut TaskState) -> R) -> R {
        let mut guard = self.write();
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: TaskId, active: bool) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: format!("Description {}", id),
            active,
        }
    }

    fn loaded(filter: Filter, tasks: Vec<Task>) -> TaskState {
        let mut state = TaskState::default();
        let ticket = state.begin_fetch(filter);
        assert!(state.apply_fetch(ticket, tasks));
        state
    }

    #[test]
    fn test_fetch_replaces_wholesale() {
        let mut state = loaded(Filter::All, vec![task(1, true), task(2, true)]);
        let ticket = state.begin_fetch(Filter::All);
        state.apply_fetch(ticket, vec![task(3, false)]);
        assert_eq!(state.tasks, vec![task(3, false)]);
    }

    #[test]
    fn test_fetch_drops_duplicate_ids() {
        let mut dup = task(1, false);
        dup.title = "Duplicate".into();
        let state = loaded(Filter::All, vec![task(1, true), task(2, true), dup]);
        assert_eq!(state.tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(state.tasks[0].title, "Task 1");
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut state = TaskState::default();
        let old = state.begin_fetch(Filter::All);
        let new = state.begin_fetch(Filter::Completed);

        assert!(state.apply_fetch(new, vec![task(2, false)]));
        assert!(!state.apply_fetch(old, vec![task(1, true)]));
        assert_eq!(state.tasks, vec![task(2, false)]);
        assert_eq!(state.filter, Filter::Completed);
    }

    #[test]
    fn test_remove_only_matching_id() {
        let mut state = loaded(Filter::All, vec![task(1, true), task(2, true), task(3, true)]);
        assert!(state.remove(2));
        assert_eq!(state.tasks, vec![task(1, true), task(3, true)]);
        assert!(!state.remove(42));
        assert_eq!(state.tasks.len(), 2);
    }

    #[test]
    fn test_patch_text_in_place() {
        let mut state = loaded(Filter::All, vec![task(1, true), task(2, false)]);
        assert!(state.patch_text(2, &TaskDraft::new("New", "Body")));
        assert_eq!(state.tasks[1], Task { id: 2, title: "New".into(), description: "Body".into(), active: false });
        assert_eq!(state.tasks[0], task(1, true));
    }

    #[test]
    fn test_patch_active_touches_only_flag() {
        let mut state = loaded(Filter::All, vec![task(1, true), task(2, true)]);
        assert!(state.patch_active(1, false));
        assert_eq!(state.tasks[0], task(1, false));
        assert_eq!(state.tasks[1], task(2, true));
    }

    #[test]
    fn test_patch_active_leaves_filtered_view() {
        let mut state = loaded(Filter::Active, vec![task(1, true), task(2, true)]);
        assert!(state.patch_active(1, false));
        assert_eq!(state.tasks, vec![task(2, true)]);
    }

    #[test]
    fn test_filter_moves_only_when_fetch_lands() {
        let mut state = loaded(Filter::All, vec![task(1, true), task(2, false)]);
        // Fetch for `completed` never lands
        state.begin_fetch(Filter::Completed);
        assert_eq!(state.filter, Filter::All);
        assert_eq!(state.tasks.len(), 2);

        let retry = state.begin_fetch(Filter::Completed);
        assert!(state.apply_fetch(retry, vec![task(2, false)]));
        assert_eq!(state.filter, Filter::Completed);
    }
}
