//! Task Modal Component
//!
//! Dialog with title/description inputs used for both creating and editing.

use leptos::prelude::*;

use crate::form::{FormPhase, FormState};
use crate::models::{Field, TaskDraft};

/// Task form dialog
///
/// Visibility follows `open`; the modal never closes itself on submit.
/// A valid draft is handed to `on_submit`, and the caller decides whether to
/// close through `on_open_change`.
///
/// # Arguments
/// * `open` - Externally owned visibility flag
/// * `on_open_change` - Called with `false` on cancel or backdrop click
/// * `heading` - Dialog title (e.g. "Create new task")
/// * `submit_label` - Text of the submit button
/// * `initial` - Seed values read each time the modal opens (empty when omitted)
/// * `on_submit` - Receives the validated draft
/// * `require_all_fields` - Whether title and description must be non-empty
#[component]
pub fn TaskModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_open_change: Callback<bool>,
    heading: &'static str,
    submit_label: &'static str,
    #[prop(optional)] initial: Option<Signal<TaskDraft>>,
    #[prop(into)] on_submit: Callback<TaskDraft>,
    #[prop(optional)] require_all_fields: bool,
) -> impl IntoView {
    let form = RwSignal::new(FormState::new(require_all_fields));

    // Seed on open, reset on close
    Effect::new(move |_| {
        let is_open = open.get();
        form.update(|f| {
            f.sync_open(is_open, || initial.map(|seed| seed.get_untracked()).unwrap_or_default())
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(draft) = form.try_update(|f| f.submit()).flatten() {
            on_submit.run(draft);
        }
    };

    let field_value = move |field: Field| form.with(|f| f.draft().get(field).to_string());
    let field_error = move |field: Field| {
        form.with(|f| f.errors().get(field).map(str::to_string))
            .map(|msg| view! { <p class="field-error">{msg}</p> })
    };

    view! {
        <Show when=move || open.get() && form.with(|f| f.is_open())>
            <div class="modal-backdrop" on:click=move |_| on_open_change.run(false)>
                <form
                    class=move || {
                        if form.with(|f| f.phase() == FormPhase::OpenInvalid) { "modal invalid" } else { "modal" }
                    }
                    on:click=|ev| ev.stop_propagation()
                    on:submit=submit
                >
                    <h2 class="modal-title">{heading}</h2>

                    <label class="modal-field">
                        <span>"Title"</span>
                        <input
                            type="text"
                            placeholder="Enter the task title"
                            prop:value=move || field_value(Field::Title)
                            on:input=move |ev| form.update(|f| f.input(Field::Title, event_target_value(&ev)))
                        />
                        {move || field_error(Field::Title)}
                    </label>

                    <label class="modal-field">
                        <span>"Description"</span>
                        <textarea
                            placeholder="Enter the task description"
                            prop:value=move || field_value(Field::Description)
                            on:input=move |ev| form.update(|f| f.input(Field::Description, event_target_value(&ev)))
                        ></textarea>
                        {move || field_error(Field::Description)}
                    </label>

                    <div class="modal-actions">
                        <button type="button" class="btn secondary" on:click=move |_| on_open_change.run(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn primary">{submit_label}</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
