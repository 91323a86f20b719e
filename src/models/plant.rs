use serde::Deserialize;
use serde_json::Value;

use super::RecordValues;

/// Attribute slugs on the plants object.
pub mod slugs {
    pub const NAME: &str = "name";
    pub const ADDRESS: &str = "address_7";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const ZIP: &str = "zip";
    pub const PERMIT: &str = "permit";
    pub const PERMIT_STATUS: &str = "permit_status";
    pub const PERMIT_TYPE: &str = "permit_type";
    pub const MAIN_CONTACT: &str = "main_contact";
}

// Response from the plants records query endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlantsResponse {
    #[serde(default)]
    pub data: Vec<PlantRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlantRecord {
    /// `{"record_id": ...}`; kept loose so a null or odd id only blanks this plant's id
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub values: RecordValues,
}

impl PlantRecord {
    pub fn record_id(&self) -> &str {
        self.id
            .get("record_id")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn name(&self) -> String {
        self.values.text(slugs::NAME)
    }

    pub fn city(&self) -> String {
        self.values.text(slugs::CITY)
    }

    /// Person record id of the main contact, `""` if none is linked.
    pub fn main_contact_id(&self) -> String {
        self.values.text(slugs::MAIN_CONTACT)
    }
}
