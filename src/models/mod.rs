//! Data models for CRM entities and the map output.
//!
//! - `PlantRecord`: a facility record from the plants object
//! - `PersonRecord`, `Contact`: main-contact people and their display fields
//! - `PipelineEntry`: list entry linking a plant to its sales stage
//! - `MapRecord`: one flattened row of the territory map dataset
//! - `AttributeValue`: the polymorphic attribute-value shape

pub mod map_record;
pub mod person;
pub mod pipeline;
pub mod plant;
pub mod value;

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub use map_record::MapRecord;
pub use person::{Contact, PersonRecord, PersonResponse};
pub use pipeline::{PipelineEntry, PipelineResponse, NOT_IN_PIPELINE};
pub use plant::{PlantRecord, PlantsResponse};
pub use value::{extract, AttributeValue};

/// Attribute slug to value-list mapping, as returned under a record's `values`.
#[derive(Debug, Clone, Default)]
pub struct RecordValues(HashMap<String, Value>);

// Anything other than an object (null included) reads as no values
impl<'de> Deserialize<'de> for RecordValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(Self(map.into_iter().collect())),
            _ => Ok(Self::default()),
        }
    }
}

impl RecordValues {
    /// Display string for an attribute, `""` when absent or not a list.
    pub fn text(&self, slug: &str) -> String {
        let entries = self
            .0
            .get(slug)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        extract(entries)
    }
}
