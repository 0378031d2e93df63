//! List Controller
//!
//! One generic controller per entity. Every write is followed by a full
//! re-read of the collection; that re-read is the only consistency mechanism.

use std::marker::PhantomData;

use log::{debug, info};

use super::state::ListState;
use crate::api::{ResourceApi, StatusApi};
use crate::domain::{RecordId, Resource, Status, StatusResource};
use crate::error::{ApiResult, SubmitError};
use crate::forms::DraftForm;
use crate::store::StateStore;

/// Outcome of a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// The response was rendered; carries the record count
    Applied(usize),
    /// A newer fetch was issued meanwhile (or the view is gone); nothing changed
    Stale,
}

pub struct ListController<R, A, S> {
    api: A,
    store: S,
    _resource: PhantomData<fn() -> R>,
}

impl<R, A: Clone, S: Clone> Clone for ListController<R, A, S> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            store: self.store.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R, A, S> ListController<R, A, S>
where
    R: Resource,
    A: ResourceApi<R>,
    S: StateStore<ListState<R>>,
{
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            _resource: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the collection and render it if no newer fetch was issued.
    ///
    /// A failed fetch leaves the current records in place and returns the
    /// error, stale or not.
    pub async fn refresh(&self) -> ApiResult<Refresh> {
        let Some(ticket) = self.store.update(ListState::begin_fetch) else {
            return Ok(Refresh::Stale);
        };
        debug!("[{}] fetch {} started", R::PATH, ticket);

        match self.api.list().await {
            Ok(records) => {
                let count = records.len();
                let applied = self
                    .store
                    .update(|state| state.apply(ticket, records))
                    .unwrap_or(false);
                if applied {
                    debug!("[{}] fetch {} applied, {} records", R::PATH, ticket, count);
                    Ok(Refresh::Applied(count))
                } else {
                    debug!("[{}] fetch {} superseded, discarded", R::PATH, ticket);
                    Ok(Refresh::Stale)
                }
            }
            Err(err) => {
                self.store.update(|state| state.abandon(ticket));
                Err(err)
            }
        }
    }

    pub async fn create(&self, draft: &R::Draft) -> ApiResult<Refresh> {
        self.create_then(draft, || ()).await
    }

    /// Validate `form` and create the record; nothing is sent if validation
    /// fails. `after_create` runs once the server accepted the record, before
    /// the refresh.
    pub async fn submit<F>(
        &self,
        form: &F,
        after_create: impl FnOnce(),
    ) -> Result<Refresh, SubmitError>
    where
        F: DraftForm<Draft = R::Draft>,
    {
        let draft = form.validate()?;
        Ok(self.create_then(&draft, after_create).await?)
    }

    async fn create_then(
        &self,
        draft: &R::Draft,
        after_create: impl FnOnce(),
    ) -> ApiResult<Refresh> {
        self.api.create(draft).await?;
        info!("[{}] created", R::PATH);
        after_create();
        self.refresh().await
    }

    pub async fn remove(&self, id: RecordId) -> ApiResult<Refresh> {
        self.api.delete(id).await?;
        info!("[{}] deleted {}", R::PATH, id);
        self.refresh().await
    }
}

impl<R, A, S> ListController<R, A, S>
where
    R: StatusResource,
    A: StatusApi<R>,
    S: StateStore<ListState<R>>,
{
    pub async fn set_status(&self, id: RecordId, status: Status) -> ApiResult<Refresh> {
        self.api.patch_status(id, &status).await?;
        info!("[{}] {} -> {}", R::PATH, id, status);
        self.refresh().await
    }
}
