//! Filter Bar Component
//!
//! Mutually exclusive all/active/completed toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::Filter;
use crate::store::{use_task_store, TaskStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_task_store();

    view! {
        <div class="filter-bar" role="group">
            {Filter::ALL.iter().map(|&filter| {
                let is_selected = move || store.filter().get() == filter;
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| {
                            let controller = ctx.controller();
                            spawn_local(async move {
                                if let Err(err) = controller.select_filter(filter).await {
                                    ctx.report("load tasks", &err);
                                }
                            });
                        }
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
