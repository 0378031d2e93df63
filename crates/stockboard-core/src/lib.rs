//! Stockboard Core
//!
//! Target-independent half of the Stockboard frontend:
//! - domain: entities as the REST API returns them, and their row labels
//! - forms: raw form input and its validation into POST drafts
//! - list: per-entity list state and the generic refresh-after-write controller
//! - api: the client seam the browser HTTP client implements
//! - store: the state seam controllers write through
//! - nav / dashboard / config: navigation, summary panel and client settings
//! - notice: the error sink failed requests are reported to

pub mod api;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod forms;
pub mod list;
pub mod nav;
pub mod notice;
pub mod store;

pub use api::{ReportsApi, ResourceApi, StatusApi};
pub use config::{ClientConfig, ConfigSource};
pub use dashboard::{load_report, DashboardState};
pub use domain::{
    rows, Health, NewProduct, NewSetting, NewTask, Product, RecordId, Report, Resource, RowView,
    Setting, Status, StatusResource, Task,
};
pub use error::{ApiError, ApiResult, SubmitError, ValidationError};
pub use forms::{DraftForm, ProductForm, SettingForm, TaskForm, DEFAULT_PRIORITY, PRIORITIES};
pub use list::{FetchTicket, Fetched, ListController, ListState, Phase, Refresh, RequestSequence};
pub use nav::{Navigation, Panel};
pub use notice::{Notice, NoticeBoard};
pub use store::StateStore;
