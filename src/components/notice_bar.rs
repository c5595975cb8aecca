//! Notice Bar Component
//!
//! Banner for failed backend calls.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.notice.get().map(|notice| view! {
            <div class="notice error" role="alert">
                <span class="notice-text">{notice.message}</span>
                <button class="notice-dismiss" title="Dismiss" on:click=move |_| ctx.dismiss_notice()>
                    "×"
                </button>
            </div>
        })
    }
}
