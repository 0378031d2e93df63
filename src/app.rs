//! Stockboard Frontend App
//!
//! Header with server status, tab bar, the four panels and the notice stack.

use leptos::prelude::*;
use stockboard_core::{ClientConfig, Navigation, Panel};

use crate::api::HttpApi;
use crate::components::{
    DashboardPanel, NavBar, Notices, ProductPanel, ServerStatus, SettingPanel, TaskPanel,
};
use crate::context::AppContext;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // State
    let nav = signal(Navigation::new(Panel::Dashboard));

    // Provide context to all children
    provide_context(AppContext::new(nav, config.notice_ttl_ms));
    provide_context(HttpApi::new(config));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Stockboard"</h1>
                <ServerStatus />
            </header>

            <NavBar />

            // All panels stay mounted; only the active one is visible
            <main class="main-content">
                <DashboardPanel />
                <ProductPanel />
                <TaskPanel />
                <SettingPanel />
            </main>

            <Notices />
        </div>
    }
}
