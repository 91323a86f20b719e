//! Enrichment pipeline: joins plants with pipeline stage, coordinates and
//! main-contact details.
//!
//! Network failures never abort the run. A failed plants query yields no
//! plants, a failed pipeline query leaves every plant "Not in Pipeline", and
//! a failed person fetch leaves that contact blank.

use std::collections::{HashMap, HashSet};

use tracing::{info, warn};

use crate::api::ApiClient;
use crate::geo;
use crate::models::plant::slugs;
use crate::models::{Contact, MapRecord, PlantRecord, NOT_IN_PIPELINE};

/// Counts gathered along the way, plus the map records.
#[derive(Debug, Default)]
pub struct Enrichment {
    pub plants_fetched: usize,
    pub pipeline_entries: usize,
    pub contacts_requested: usize,
    pub contacts_fetched: usize,
    pub records: Vec<MapRecord>,
}

/// Fetch everything from the CRM and build the map records.
pub async fn run(client: &ApiClient, person_fetch_limit: usize) -> Enrichment {
    let plants = client.fetch_plants().await.unwrap_or_else(|e| {
        warn!(error = %e, "Plants query failed, continuing with no plants");
        Vec::new()
    });
    info!(count = plants.len(), "Fetched plants");

    let stages = client.fetch_pipeline_stages().await.unwrap_or_else(|e| {
        warn!(error = %e, "Pipeline query failed, continuing without stages");
        HashMap::new()
    });
    info!(count = stages.len(), "Fetched pipeline stages");

    let contact_ids = collect_contact_ids(&plants);
    let contacts = fetch_contacts(client, &contact_ids, person_fetch_limit).await;

    let records = build_records(&plants, &stages, &contacts);
    info!(
        plants = plants.len(),
        mapped = records.len(),
        contacts = contacts.len(),
        "Enrichment complete"
    );

    Enrichment {
        plants_fetched: plants.len(),
        pipeline_entries: stages.len(),
        contacts_requested: contact_ids.len(),
        contacts_fetched: contacts.len(),
        records,
    }
}

/// Distinct, non-empty main-contact ids in first-seen plant order.
pub fn collect_contact_ids(plants: &[PlantRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    plants
        .iter()
        .map(PlantRecord::main_contact_id)
        .filter(|id| !id.is_empty() && seen.insert(id.clone()))
        .collect()
}

/// Fetch contacts one at a time, up to `limit` ids. Failed ids are omitted.
pub async fn fetch_contacts(
    client: &ApiClient,
    ids: &[String],
    limit: usize,
) -> HashMap<String, Contact> {
    if ids.len() > limit {
        info!(requested = ids.len(), limit = limit, "Contact fetch capped");
    }

    let mut contacts = HashMap::new();
    for id in ids.iter().take(limit) {
        match client.fetch_person(id).await {
            Ok(contact) => {
                contacts.insert(id.clone(), contact);
            }
            Err(e) => warn!(
                person_id = %id,
                timed_out = e.is_timeout(),
                error = %e,
                "Failed to fetch contact"
            ),
        }
    }
    contacts
}

/// Join plants with stages and contacts, dropping plants without a name or
/// without known city coordinates. Fetch order is preserved.
pub fn build_records(
    plants: &[PlantRecord],
    stages: &HashMap<String, String>,
    contacts: &HashMap<String, Contact>,
) -> Vec<MapRecord> {
    let no_contact = Contact::default();
    let mut records = Vec::new();

    for plant in plants {
        let name = plant.name();
        if name.is_empty() {
            continue;
        }

        let city = plant.city();
        let Some(coords) = geo::lookup(&city) else {
            continue;
        };

        let contact = contacts.get(&plant.main_contact_id()).unwrap_or(&no_contact);
        let id = plant.record_id().to_string();
        let stage = stages
            .get(&id)
            .cloned()
            .unwrap_or_else(|| NOT_IN_PIPELINE.to_string());

        records.push(MapRecord {
            name,
            address: plant.values.text(slugs::ADDRESS),
            city,
            state: plant.values.text(slugs::STATE),
            zip: plant.values.text(slugs::ZIP),
            lat: coords.lat,
            lon: coords.lon,
            permit: plant.values.text(slugs::PERMIT),
            permit_status: plant.values.text(slugs::PERMIT_STATUS),
            permit_type: plant.values.text(slugs::PERMIT_TYPE),
            stage,
            contact_name: contact.name.clone(),
            contact_email: contact.email.clone(),
            contact_phone: contact.phone.clone(),
            id,
        });
    }

    records
}
