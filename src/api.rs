//! REST Client
//!
//! `fetch`-backed implementation of the core API traits. One client serves
//! every resource; the path comes from the record type.

use std::sync::Arc;

use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use stockboard_core::{
    ApiError, ApiResult, ClientConfig, Health, RecordId, Report, ReportsApi, Resource, ResourceApi,
    Status, StatusApi, StatusResource,
};

#[derive(Clone)]
pub struct HttpApi {
    config: Arc<ClientConfig>,
}

#[derive(Serialize)]
struct StatusPatch<'a> {
    status: &'a Status,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.config.url(path);
        debug!("GET {}", url);
        let response = dispatch("GET", path, Request::get(&url).build()).await?;
        response.json::<T>().await.map_err(|e| ApiError::decode(path, e))
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let url = self.config.url(path);
        debug!("POST {}", url);
        dispatch("POST", path, Request::post(&url).json(body)).await.map(|_| ())
    }

    async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let url = self.config.url(path);
        debug!("PATCH {}", url);
        dispatch("PATCH", path, Request::patch(&url).json(body)).await.map(|_| ())
    }

    async fn delete_path(&self, path: &str) -> ApiResult<()> {
        let url = self.config.url(path);
        debug!("DELETE {}", url);
        dispatch("DELETE", path, Request::delete(&url).build()).await.map(|_| ())
    }
}

/// Send `request`; transport failures and non-2xx statuses become errors
async fn dispatch(
    method: &'static str,
    path: &str,
    request: Result<Request, gloo::net::Error>,
) -> ApiResult<Response> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status {
            method,
            path: path.to_string(),
            status: response.status(),
            reason: response.status_text(),
        });
    }
    Ok(response)
}

fn record_path<R: Resource>(id: RecordId) -> String {
    format!("{}/{}", R::PATH, id)
}

#[async_trait(?Send)]
impl<R: Resource> ResourceApi<R> for HttpApi {
    async fn list(&self) -> ApiResult<Vec<R>> {
        self.get(R::PATH).await
    }

    async fn create(&self, draft: &R::Draft) -> ApiResult<()> {
        self.post(R::PATH, draft).await
    }

    async fn delete(&self, id: RecordId) -> ApiResult<()> {
        self.delete_path(&record_path::<R>(id)).await
    }
}

#[async_trait(?Send)]
impl<R: StatusResource> StatusApi<R> for HttpApi {
    async fn patch_status(&self, id: RecordId, status: &Status) -> ApiResult<()> {
        self.patch(&record_path::<R>(id), &StatusPatch { status }).await
    }
}

#[async_trait(?Send)]
impl ReportsApi for HttpApi {
    async fn report(&self) -> ApiResult<Report> {
        self.get("reports").await
    }

    async fn health(&self) -> ApiResult<Health> {
        self.get("").await
    }
}
