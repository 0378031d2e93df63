//! Products Panel
//!
//! Create form plus the product list with status selector per row.

use leptos::prelude::*;
use stockboard_core::{Panel, Product, ProductForm};

use super::{PanelSection, PrioritySelect, RecordList};
use crate::context::use_app_context;
use crate::store::{delete_callback, status_callback, submit_form, use_list};

#[component]
pub fn ProductPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (state, ctrl) = use_list::<Product>(Panel::Products);
    let form = RwSignal::new(ProductForm::default());

    let on_submit = {
        let ctrl = ctrl.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            submit_form(ctx, ctrl.clone(), form);
        }
    };

    view! {
        <PanelSection panel=Panel::Products>
            <form class="entity-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Product name"
                    prop:value=move || form.with(|f| f.product_name.clone())
                    on:input=move |ev| form.update(|f| f.product_name = event_target_value(&ev))
                />
                <input
                    type="number"
                    step="0.01"
                    placeholder="Price"
                    prop:value=move || form.with(|f| f.price.clone())
                    on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="Quantity"
                    prop:value=move || form.with(|f| f.quantity.clone())
                    on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                />
                <PrioritySelect
                    value=Signal::derive(move || form.with(|f| f.priority.clone()))
                    on_change=move |priority: String| form.update(|f| f.priority = priority)
                />
                <input
                    type="date"
                    prop:value=move || form.with(|f| f.due_date.clone())
                    on:input=move |ev| form.update(|f| f.due_date = event_target_value(&ev))
                />
                <button type="submit">"Add Product"</button>
            </form>

            <RecordList
                state=state
                on_status=status_callback(ctx, ctrl.clone())
                on_delete=delete_callback(ctx, ctrl)
                empty_text="No products yet"
            />
        </PanelSection>
    }
}
