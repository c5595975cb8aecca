//! Todo Frontend App
//!
//! Task list page: filter toggle, create dialog and the task rows for the
//! active filter.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{FilterBar, Footer, NoticeBar, TaskModal, TaskRow};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::models::TaskDraft;
use crate::store::{TaskState, TaskStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(TaskState::default());
    let (creating, set_creating) = signal(false);

    let ctx = AppContext::new(store, ApiConfig::load(), signal(None));
    provide_context(store);
    provide_context(ctx);

    // Initial load; later loads follow filter changes and creates
    Effect::new(move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            if let Err(err) = controller.refresh().await {
                ctx.report("load tasks", &err);
            }
        });
    });

    let create = move |draft: TaskDraft| {
        let controller = ctx.controller();
        spawn_local(async move {
            match controller.create(&draft).await {
                Ok(_) => set_creating.set(false),
                Err(err) => ctx.report("create the task", &err),
            }
        });
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"My tasks"</h1>
                <p class="tagline">
                    <span class="muted">"Get started"</span>
                    " and organize your tasks simply and efficiently"
                </p>
            </header>

            <NoticeBar />

            <div class="toolbar">
                <FilterBar />
                <button class="btn secondary" on:click=move |_| set_creating.set(true)>
                    "Add task"
                </button>
            </div>

            <main class="task-list">
                <Show
                    when=move || !store.tasks().with(|t| t.is_empty())
                    fallback=|| view! {
                        <p class="empty-state">"No tasks yet. Create your first one!"</p>
                    }
                >
                    <For
                        each=move || store.tasks().get()
                        key=|task| task.clone()
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </Show>
            </main>

            <TaskModal
                open=creating
                on_open_change=move |open| set_creating.set(open)
                heading="Create new task"
                submit_label="Create"
                on_submit=create
                require_all_fields=true
            />

            <Footer />
        </div>
    }
}
