//! Select Components
//!
//! Status selector for rows and priority selector for the create forms.

use leptos::prelude::*;
use stockboard_core::{Status, PRIORITIES};

/// Status dropdown preset to the record's current status
#[component]
pub fn StatusSelect(
    current: Status,
    #[prop(into)] on_change: Callback<Status>,
) -> impl IntoView {
    let options = current.options();
    view! {
        <select
            class="status-select"
            on:change=move |ev| on_change.run(Status::from(event_target_value(&ev)))
        >
            {options.into_iter().map(|status| {
                let selected = status == current;
                let value = status.as_str().to_string();
                let label = value.clone();
                view! {
                    <option value=value selected=selected>{label}</option>
                }
            }).collect_view()}
        </select>
    }
}

/// Priority dropdown bound to a form field
#[component]
pub fn PrioritySelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="priority-select"
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {PRIORITIES.iter().map(|priority| {
                let priority = *priority;
                view! {
                    <option value=priority prop:selected=move || value.get() == priority>
                        {priority}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
