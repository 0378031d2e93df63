//! Reactive List State
//!
//! Per-entity state lives in a signal; the core controllers write to it
//! through `SignalStore`, and views re-render from it.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use stockboard_core::{
    ApiResult, DraftForm, ListController, ListState, Panel, RecordId, Resource, Status,
    StatusResource, SubmitError,
};

use crate::api::HttpApi;
use crate::context::{use_api, use_app_context, AppContext};

/// Signal-backed `StateStore`
pub struct SignalStore<T: Send + Sync + 'static>(RwSignal<T>);

impl<T: Send + Sync + 'static> Clone for SignalStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for SignalStore<T> {}

impl<T: Send + Sync + 'static> SignalStore<T> {
    pub fn new(signal: RwSignal<T>) -> Self {
        Self(signal)
    }
}

impl<T: Send + Sync + 'static> stockboard_core::StateStore<T> for SignalStore<T> {
    fn update<U>(&self, f: impl FnOnce(&mut T) -> U) -> Option<U> {
        self.0.try_update(f)
    }
}

/// List controller used by the panels
pub type Controller<R> = ListController<R, HttpApi, SignalStore<ListState<R>>>;

/// State + controller for one panel's list. The list loads on mount and on
/// every activation of `panel`.
pub fn use_list<R: Resource>(panel: Panel) -> (RwSignal<ListState<R>>, Controller<R>) {
    let ctx = use_app_context();
    let state = RwSignal::new(ListState::<R>::new());
    let ctrl: Controller<R> = ListController::new(use_api(), SignalStore::new(state));

    let loader = ctrl.clone();
    ctx.on_activation(panel, move || {
        let ctrl = loader.clone();
        spawn_reported(ctx, async move { ctrl.refresh().await });
    });

    (state, ctrl)
}

/// Run `fut` and route its failure to the notification sink
pub fn spawn_reported<T, F>(ctx: AppContext, fut: F)
where
    T: 'static,
    F: Future<Output = ApiResult<T>> + 'static,
{
    spawn_local(async move { ctx.report(fut.await) });
}

pub fn delete_callback<R: Resource>(ctx: AppContext, ctrl: Controller<R>) -> Callback<RecordId> {
    Callback::new(move |id: RecordId| {
        let ctrl = ctrl.clone();
        spawn_reported(ctx, async move { ctrl.remove(id).await });
    })
}

pub fn status_callback<R: StatusResource>(
    ctx: AppContext,
    ctrl: Controller<R>,
) -> Callback<(RecordId, Status)> {
    Callback::new(move |(id, status): (RecordId, Status)| {
        let ctrl = ctrl.clone();
        spawn_reported(ctx, async move { ctrl.set_status(id, status).await });
    })
}

/// Submit handler for a create form: blocking alert on invalid input, form
/// cleared once the server accepted the record.
pub fn submit_form<R, F>(ctx: AppContext, ctrl: Controller<R>, form: RwSignal<F>)
where
    R: Resource,
    F: DraftForm<Draft = R::Draft> + Send + Sync + 'static,
{
    let snapshot = form.get_untracked();
    spawn_local(async move {
        match ctrl.submit(&snapshot, || form.update(F::reset)).await {
            Ok(_) => {}
            Err(SubmitError::Invalid(err)) => {
                log::debug!("[{}] rejected: {}", R::PATH, err);
                gloo::dialogs::alert(&err.to_string());
            }
            Err(SubmitError::Api(err)) => ctx.report::<()>(Err(err)),
        }
    });
}
