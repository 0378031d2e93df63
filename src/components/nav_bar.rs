//! Navigation Components
//!
//! Tab bar switching between the four panels, and the section wrapper that
//! shows only the active one.

use leptos::prelude::*;
use stockboard_core::Panel;

use crate::context::use_app_context;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="nav-bar">
            {Panel::ALL.into_iter().map(|panel| {
                view! {
                    <button
                        class=move || ctx.nav.with(|nav| nav.tab_class(panel))
                        data-section=panel.id()
                        on:click=move |_| ctx.activate(panel)
                    >
                        {panel.title()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

/// Section for one panel, hidden unless active
#[component]
pub fn PanelSection(panel: Panel, children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section id=panel.id() class=move || ctx.nav.with(|nav| nav.section_class(panel))>
            <h2>{panel.title()}</h2>
            {children()}
        </section>
    }
}
