//! Task Entity

use serde::{Deserialize, Serialize};

use super::entity::{RecordId, Resource, StatusResource};
use super::{or_placeholder, Status};

/// Task as listed by `GET /tasks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: String,
    #[serde(default)]
    pub status: Status,
    /// Server timestamp, `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
}

/// Body of `POST /tasks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: String,
}

impl Resource for Task {
    type Draft = NewTask;
    const PATH: &'static str = "tasks";

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> String {
        format!(
            "{} | {} | Priority: {} | Created: {}",
            self.title,
            or_placeholder(self.description.as_deref()),
            self.priority,
            self.created_at,
        )
    }

    fn status(&self) -> Option<&Status> {
        Some(&self.status)
    }
}

impl StatusResource for Task {}
