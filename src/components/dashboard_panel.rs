//! Dashboard Panel
//!
//! Four server-computed totals, reloaded on every activation.

use leptos::prelude::*;
use stockboard_core::{load_report, DashboardState, Panel};

use super::PanelSection;
use crate::context::{use_api, use_app_context};
use crate::store::{spawn_reported, SignalStore};

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let state = RwSignal::new(DashboardState::default());

    ctx.on_activation(Panel::Dashboard, move || {
        let api = api.clone();
        let store = SignalStore::new(state);
        spawn_reported(ctx, async move { load_report(&api, &store).await });
    });

    view! {
        <PanelSection panel=Panel::Dashboard>
            <div id="dashboard-stats" class:loading=move || state.with(|s| s.is_loading())>
                {move || match state.with(|s| s.report().copied()) {
                    Some(report) => report
                        .summary()
                        .into_iter()
                        .map(|(label, value)| view! { <p>{label}": "{value}</p> })
                        .collect_view()
                        .into_any(),
                    None => view! { <p class="record-empty">"No report loaded"</p> }.into_any(),
                }}
            </div>
        </PanelSection>
    }
}
