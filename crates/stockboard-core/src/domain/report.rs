//! Aggregates computed by the server.

use serde::{Deserialize, Serialize};

/// Body of `GET /reports`, recomputed by the server on every request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Report {
    pub total_products: u64,
    pub completed_products: u64,
    pub total_tasks: u64,
    pub completed_tasks: u64,
}

impl Report {
    /// Dashboard lines, in display order
    pub fn summary(&self) -> [(&'static str, u64); 4] {
        [
            ("Total Products", self.total_products),
            ("Completed Products", self.completed_products),
            ("Total Tasks", self.total_tasks),
            ("Completed Tasks", self.completed_tasks),
        ]
    }
}

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub message: String,
}
