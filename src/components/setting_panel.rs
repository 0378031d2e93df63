//! Settings Panel
//!
//! Name/value pairs; create and delete only.

use leptos::prelude::*;
use stockboard_core::{Panel, Setting, SettingForm};

use super::{PanelSection, RecordList};
use crate::context::use_app_context;
use crate::store::{delete_callback, submit_form, use_list};

#[component]
pub fn SettingPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (state, ctrl) = use_list::<Setting>(Panel::Settings);
    let form = RwSignal::new(SettingForm::default());

    let on_submit = {
        let ctrl = ctrl.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            submit_form(ctx, ctrl.clone(), form);
        }
    };

    view! {
        <PanelSection panel=Panel::Settings>
            <form class="entity-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Setting name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Value"
                    prop:value=move || form.with(|f| f.value.clone())
                    on:input=move |ev| form.update(|f| f.value = event_target_value(&ev))
                />
                <button type="submit">"Add Setting"</button>
            </form>

            <RecordList
                state=state
                on_delete=delete_callback(ctx, ctrl)
                empty_text="No settings yet"
            />
        </PanelSection>
    }
}
