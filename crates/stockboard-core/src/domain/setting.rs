//! Setting Entity

use serde::{Deserialize, Serialize};

use super::entity::{RecordId, Resource};

/// Name/value pair as listed by `GET /settings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub id: RecordId,
    pub name: String,
    pub value: String,
}

/// Body of `POST /settings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSetting {
    pub name: String,
    pub value: String,
}

impl Resource for Setting {
    type Draft = NewSetting;
    const PATH: &'static str = "settings";

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }
}
