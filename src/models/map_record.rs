use serde::{Deserialize, Serialize};

/// One plant on the territory map. Field order is the output JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub lat: f64,
    pub lon: f64,
    pub permit: String,
    pub permit_status: String,
    pub permit_type: String,
    pub stage: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}
