//! Error Notices
//!
//! Toasts for failed requests; each closes on click or after its timeout.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Notices() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="notices">
            <For
                each=move || ctx.notices.with(|board| board.notices().to_vec())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class="notice error">
                            <span>{notice.message}</span>
                            <button class="notice-close" on:click=move |_| ctx.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
