//! Product Entity

use serde::{Deserialize, Serialize};

use super::entity::{RecordId, Resource, StatusResource};
use super::{or_placeholder, Status};

/// Product as listed by `GET /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    pub priority: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: Status,
}

/// Body of `POST /products`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    pub priority: String,
    /// Serialized as `null` when no date was picked
    pub due_date: Option<String>,
}

impl Resource for Product {
    type Draft = NewProduct;
    const PATH: &'static str = "products";

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> String {
        format!(
            "{} | ${} | Qty: {} | Priority: {} | Due: {}",
            self.product_name,
            self.price,
            self.quantity,
            self.priority,
            or_placeholder(self.due_date.as_deref()),
        )
    }

    fn status(&self) -> Option<&Status> {
        Some(&self.status)
    }
}

impl StatusResource for Product {}
