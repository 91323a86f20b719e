//! API client for the CRM REST API.
//!
//! Three calls are made per run: the plants query, the pipeline list entries
//! query, and one GET per main contact. Every call returns a typed
//! `ApiError` on failure; deciding whether to degrade is left to the caller.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::auth::ApiKey;
use crate::config::Config;
use crate::models::{Contact, PersonResponse, PipelineResponse, PlantRecord, PlantsResponse};

use super::ApiError;

#[derive(Debug, Serialize)]
struct QueryBody {
    limit: u32,
}

/// API client for the CRM.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    api_key: ApiKey,
    base_url: String,
    plants_object: String,
    pipeline_list_id: String,
    page_limit: u32,
    bulk_timeout: Duration,
    person_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &Config, api_key: ApiKey) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            plants_object: config.plants_object.clone(),
            pipeline_list_id: config.pipeline_list_id.clone(),
            page_limit: config.page_limit,
            bulk_timeout: config.bulk_timeout(),
            person_timeout: config.person_timeout(),
        })
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::check_response(response).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, timeout: Duration) -> Result<T, ApiError> {
        debug!(url = url, "GET");
        let response = self
            .client
            .get(url)
            .bearer_auth(self.api_key.as_str())
            .timeout(timeout)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<T, ApiError> {
        debug!(url = url, "POST");
        let response = self
            .client
            .post(url)
            .bearer_auth(self.api_key.as_str())
            .json(body)
            .timeout(timeout)
            .send()
            .await?;
        Self::parse(response).await
    }

    // ===== Data Fetching Methods =====

    /// Fetch the first page of plant records.
    pub async fn fetch_plants(&self) -> Result<Vec<PlantRecord>, ApiError> {
        let url = format!("{}/objects/{}/records/query", self.base_url, self.plants_object);
        let body = QueryBody { limit: self.page_limit };
        let response: PlantsResponse = self.post(&url, &body, self.bulk_timeout).await?;
        Ok(response.data)
    }

    /// Fetch the pipeline list and map each parent plant id to its stage title.
    ///
    /// Entries without a parent id or a stage are skipped. When several
    /// entries share a parent, the last one wins.
    pub async fn fetch_pipeline_stages(&self) -> Result<HashMap<String, String>, ApiError> {
        let url = format!("{}/lists/{}/entries/query", self.base_url, self.pipeline_list_id);
        let body = QueryBody { limit: self.page_limit };
        let response: PipelineResponse = self.post(&url, &body, self.bulk_timeout).await?;

        let mut stages = HashMap::new();
        for entry in &response.data {
            let (Some(parent_id), Some(stage)) = (entry.parent_id(), entry.stage()) else {
                continue;
            };
            stages.insert(parent_id.to_string(), stage);
        }
        debug!(entries = response.data.len(), staged = stages.len(), "Parsed pipeline entries");
        Ok(stages)
    }

    /// Fetch a single person and extract their contact fields.
    pub async fn fetch_person(&self, person_id: &str) -> Result<Contact, ApiError> {
        let url = format!("{}/objects/people/records/{}", self.base_url, person_id);
        let response: PersonResponse = self.get(&url, self.person_timeout).await?;
        Ok(response.data.to_contact())
    }
}
