//! API Seam
//!
//! Abstract interface to the REST API. The browser client implements these
//! over `fetch`; tests use in-memory implementations.
//!
//! Futures are not `Send`: the browser runs everything on one thread.

use async_trait::async_trait;

use crate::domain::{Health, RecordId, Report, Resource, Status, StatusResource};
use crate::error::ApiResult;

/// CRUD calls against one resource collection
#[async_trait(?Send)]
pub trait ResourceApi<R: Resource> {
    /// `GET /{PATH}`
    async fn list(&self) -> ApiResult<Vec<R>>;

    /// `POST /{PATH}`; the response body is ignored
    async fn create(&self, draft: &R::Draft) -> ApiResult<()>;

    /// `DELETE /{PATH}/{id}`
    async fn delete(&self, id: RecordId) -> ApiResult<()>;
}

/// Status updates, only for resources that carry a status
#[async_trait(?Send)]
pub trait StatusApi<R: StatusResource>: ResourceApi<R> {
    /// `PATCH /{PATH}/{id}` with `{"status": ...}`
    async fn patch_status(&self, id: RecordId, status: &Status) -> ApiResult<()>;
}

/// Server-wide endpoints
#[async_trait(?Send)]
pub trait ReportsApi {
    /// `GET /reports`
    async fn report(&self) -> ApiResult<Report>;

    /// `GET /`
    async fn health(&self) -> ApiResult<Health>;
}
