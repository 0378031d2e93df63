//! Tasks Panel

use leptos::prelude::*;
use stockboard_core::{Panel, Task, TaskForm};

use super::{PanelSection, PrioritySelect, RecordList};
use crate::context::use_app_context;
use crate::store::{delete_callback, status_callback, submit_form, use_list};

#[component]
pub fn TaskPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (state, ctrl) = use_list::<Task>(Panel::Tasks);
    let form = RwSignal::new(TaskForm::default());

    let on_submit = {
        let ctrl = ctrl.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            submit_form(ctx, ctrl.clone(), form);
        }
    };

    view! {
        <PanelSection panel=Panel::Tasks>
            <form class="entity-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Task title"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
                <PrioritySelect
                    value=Signal::derive(move || form.with(|f| f.priority.clone()))
                    on_change=move |priority: String| form.update(|f| f.priority = priority)
                />
                <button type="submit">"Add Task"</button>
            </form>

            <RecordList
                state=state
                on_status=status_callback(ctx, ctrl.clone())
                on_delete=delete_callback(ctx, ctrl)
                empty_text="No tasks yet"
            />
        </PanelSection>
    }
}
