//! Task Row Component
//!
//! One task card with completion checkbox, edit modal and delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, TaskModal};
use crate::context::use_app_context;
use crate::models::{Task, TaskDraft};

/// A single task in the list
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let (editing, set_editing) = signal(false);

    let id = task.id;
    let completed = !task.active;
    let title = task.title.clone();
    let description = task.description.clone();
    let seed = Signal::stored(TaskDraft::from_task(&task));

    let toggle = move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            if let Err(err) = controller.toggle_active(id).await {
                ctx.report("update the task", &err);
            }
        });
    };

    let save = move |draft: TaskDraft| {
        let controller = ctx.controller();
        spawn_local(async move {
            match controller.edit(id, &draft).await {
                Ok(()) => set_editing.set(false),
                Err(err) => ctx.report("save the task", &err),
            }
        });
    };

    let delete = move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            if let Err(err) = controller.delete(id).await {
                ctx.report("delete the task", &err);
            }
        });
    };

    view! {
        <div class=if completed { "task-row completed" } else { "task-row" }>
            <input type="checkbox" checked=completed on:change=toggle />

            <div class="task-text">
                <h3 class="task-title">{title}</h3>
                <p class="task-description">{description}</p>
            </div>

            <div class="task-actions">
                <button class="btn" title="Edit task" on:click=move |_| set_editing.set(true)>
                    "Edit"
                </button>
                <DeleteConfirmButton on_confirm=delete />
            </div>

            <TaskModal
                open=editing
                on_open_change=move |open| set_editing.set(open)
                heading="Edit task"
                submit_label="Save"
                initial=seed
                on_submit=save
            />
        </div>
    }
}
