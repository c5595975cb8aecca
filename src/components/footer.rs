//! Footer Component
//!
//! Static page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <p>"© 2025 Your App. All rights reserved."</p>
        </footer>
    }
}
