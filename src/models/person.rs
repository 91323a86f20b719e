use serde::{Deserialize, Serialize};

use super::RecordValues;

// Response from the single person record endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonResponse {
    #[serde(default)]
    pub data: PersonRecord,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonRecord {
    #[serde(default)]
    pub values: RecordValues,
}

impl PersonRecord {
    pub fn to_contact(&self) -> Contact {
        Contact {
            name: self.values.text("name"),
            email: self.values.text("email_addresses"),
            phone: self.values.text("phone_numbers"),
        }
    }
}

/// Display fields of a plant's main contact.
/// The default (all empty) stands in for contacts that were never fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}
