//! Core Resource Trait
//!
//! Contract shared by every record type that lives behind a REST collection.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::Status;

/// Server-assigned record identifier
pub type RecordId = u32;

/// A record type reachable at `/{PATH}` with list / create / delete
pub trait Resource: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static {
    /// POST body for creating a record
    type Draft: Serialize + Send + Sync + 'static;

    /// Collection path segment, e.g. `products`
    const PATH: &'static str;

    fn id(&self) -> RecordId;

    /// Single-line label shown in the record's row
    fn label(&self) -> String;

    /// Current status, for resources that carry one
    fn status(&self) -> Option<&Status> {
        None
    }
}

/// Resources whose status can be changed with `PATCH /{PATH}/{id}`
pub trait StatusResource: Resource {}

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: RecordId,
    pub label: String,
    /// `None` for resources without a status selector
    pub status: Option<Status>,
}

impl RowView {
    pub fn completed(&self) -> bool {
        self.status.as_ref().is_some_and(Status::is_completed)
    }

    /// CSS class of the row element
    pub fn class(&self) -> &'static str {
        if self.completed() {
            "record-row completed"
        } else {
            "record-row"
        }
    }
}

/// Render records as rows, keeping server order
pub fn rows<R: Resource>(records: &[R]) -> Vec<RowView> {
    records
        .iter()
        .map(|record| RowView {
            id: record.id(),
            label: record.label(),
            status: record.status().cloned(),
        })
        .collect()
}
