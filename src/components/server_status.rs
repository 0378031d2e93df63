//! Server Status Badge
//!
//! Pings the API root once on mount and shows what it answered.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use stockboard_core::ReportsApi;

use crate::context::use_api;

#[component]
pub fn ServerStatus() -> impl IntoView {
    let api = use_api();
    let (status, set_status) = signal::<Option<Result<String, String>>>(None);

    spawn_local(async move {
        let result = api.health().await.map(|h| h.message).map_err(|e| e.to_string());
        if let Err(err) = &result {
            warn!("[health] {}", err);
        }
        let _ = set_status.try_set(Some(result));
    });

    let class = move || match status.get() {
        Some(Ok(_)) => "server-status up",
        Some(Err(_)) => "server-status down",
        None => "server-status",
    };

    view! {
        <span class=class>
            {move || match status.get() {
                None => "Connecting...".to_string(),
                Some(Ok(message)) => message,
                Some(Err(err)) => format!("Server unreachable: {}", err),
            }}
        </span>
    }
}
