//! Domain Layer
//!
//! Records as the REST API returns them. The client never owns these: every
//! list is a transient copy of the latest fetch.

mod entity;
mod product;
mod report;
mod setting;
mod status;
mod task;

pub use entity::{rows, RecordId, Resource, RowView, StatusResource};
pub use product::{NewProduct, Product};
pub use report::{Health, Report};
pub use setting::{NewSetting, Setting};
pub use status::Status;
pub use task::{NewTask, Task};

/// Placeholder shown for missing optional fields
pub(crate) const PLACEHOLDER: &str = "-";

pub(crate) fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => PLACEHOLDER,
    }
}
