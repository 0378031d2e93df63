//! Record List Component
//!
//! Renders a list state as one row per record, rebuilt on every change.
//! Row controls close over the record id.

use leptos::prelude::*;
use stockboard_core::{ListState, RecordId, Resource, RowView, Status};

use super::StatusSelect;

/// A single record row
#[component]
fn RecordRow(
    row: RowView,
    on_status: Option<Callback<(RecordId, Status)>>,
    on_delete: Callback<RecordId>,
) -> impl IntoView {
    let id = row.id;
    let class = row.class();
    let selector = row.status.zip(on_status).map(|(current, on_status)| {
        view! {
            <StatusSelect
                current=current
                on_change=move |status: Status| on_status.run((id, status))
            />
        }
    });

    view! {
        <li class=class>
            <span class="record-label">{row.label}</span>
            {selector}
            <button class="delete-btn" on:click=move |_| on_delete.run(id)>"Delete"</button>
        </li>
    }
}

#[component]
pub fn RecordList<R: Resource>(
    state: RwSignal<ListState<R>>,
    /// Omit for resources without a status
    #[prop(optional)]
    on_status: Option<Callback<(RecordId, Status)>>,
    on_delete: Callback<RecordId>,
    empty_text: &'static str,
) -> impl IntoView {
    let loading = move || state.with(|s| s.is_loading());

    view! {
        <ul class="record-list" class:loading=loading>
            {move || {
                let rows = state.with(|s| s.rows());
                if rows.is_empty() {
                    view! { <li class="record-empty">{empty_text}</li> }.into_any()
                } else {
                    rows.into_iter()
                        .map(|row| {
                            view! { <RecordRow row=row on_status=on_status on_delete=on_delete /> }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </ul>
    }
}
