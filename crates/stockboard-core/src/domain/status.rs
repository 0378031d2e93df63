//! Workflow status shared by products and tasks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a product or task
///
/// Transitions are unrestricted. Values outside the known three are kept
/// as-is so a round trip through the selector never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
    Other(String),
}

impl Status {
    /// Options offered by the status selector, in display order
    pub const CHOICES: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    pub fn as_str(&self) -> &str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
            Status::Other(s) => s,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Status::Completed)
    }

    /// Selector options for a record currently in `self`
    pub fn options(&self) -> Vec<Status> {
        let mut options = Self::CHOICES.to_vec();
        if let Status::Other(_) = self {
            options.push(self.clone());
        }
        options
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "Pending" => Status::Pending,
            "In Progress" => Status::InProgress,
            "Completed" => Status::Completed,
            other => Status::Other(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match Status::from(s.as_str()) {
            Status::Other(_) => Status::Other(s),
            known => known,
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
