//! Application Context
//!
//! Shared state provided via Leptos Context API: navigation and the
//! notification sink every failed request is routed to.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, warn};
use stockboard_core::{ApiResult, Navigation, NoticeBoard, Panel};

use crate::api::HttpApi;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Which panel is visible - read
    pub nav: ReadSignal<Navigation>,
    /// Which panel is visible - write
    set_nav: WriteSignal<Navigation>,
    /// Error notices, oldest first
    pub notices: RwSignal<NoticeBoard>,
    notice_ttl_ms: u32,
}

impl AppContext {
    pub fn new(nav: (ReadSignal<Navigation>, WriteSignal<Navigation>), notice_ttl_ms: u32) -> Self {
        Self {
            nav: nav.0,
            set_nav: nav.1,
            notices: RwSignal::new(NoticeBoard::default()),
            notice_ttl_ms,
        }
    }

    /// Show `panel` and hide the others; its list reloads
    pub fn activate(&self, panel: Panel) {
        self.set_nav.update(|nav| {
            nav.activate(panel);
        });
    }

    /// Run `load` once on mount and again whenever `panel` is activated
    pub fn on_activation(&self, panel: Panel, load: impl Fn() + 'static) {
        let nav = self.nav;
        Effect::new(move |prev: Option<()>| {
            let (due, count) =
                nav.with(|n| (n.should_load(panel, prev.is_none()), n.activations()));
            if due {
                debug!("[{}] load, activation {}", panel.id(), count);
                load();
            }
        });
    }

    /// Error boundary: failures become a notice and a warning in the log
    pub fn report<T>(&self, result: ApiResult<T>) {
        if let Err(err) = &result {
            warn!("[APP] {}", err);
        }
        if let Some(id) = self.notices.try_update(|board| board.report(&result)).flatten() {
            self.expire(id);
        }
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.notices.try_update(|board| board.dismiss(id));
    }

    fn expire(&self, id: u64) {
        let ctx = *self;
        let ttl = self.notice_ttl_ms;
        spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(ttl).await;
            ctx.dismiss(id);
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

pub fn use_api() -> HttpApi {
    use_context::<HttpApi>().expect("HttpApi should be provided")
}
