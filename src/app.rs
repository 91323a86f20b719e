//! Top-level run: credential, fetch and enrich, write, summarize.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::api::ApiClient;
use crate::auth::{self, load_api_key};
use crate::config::Config;
use crate::pipeline::{self, Enrichment};
use crate::report;

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub enrichment: Enrichment,
}

/// Execute one full run.
///
/// The API key is loaded before any request is made; if it cannot be read the
/// returned error wraps a [`auth::CredentialError`] and no output is written.
pub async fn run(config: &Config) -> Result<RunSummary> {
    let key_path = match &config.api_key_path {
        Some(path) => path.clone(),
        None => auth::default_key_path()?,
    };
    let api_key = load_api_key(&key_path)?;

    let client = ApiClient::new(config, api_key).context("Failed to build HTTP client")?;
    let enrichment = pipeline::run(&client, config.person_fetch_limit).await;

    report::write_records(&config.output_path, &enrichment.records)?;
    info!(
        path = %config.output_path.display(),
        count = enrichment.records.len(),
        "Run complete"
    );

    Ok(RunSummary {
        output_path: config.output_path.clone(),
        enrichment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::CredentialError;
    use crate::models::MapRecord;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_missing_credential_aborts_before_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("plants.json");
        let config = Config {
            api_base_url: server.uri(),
            api_key_path: Some(dir.path().join("missing_key")),
            output_path: output.clone(),
            ..Config::default()
        };

        let err = run(&config).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CredentialError>(),
            Some(CredentialError::Missing(_))
        ));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_run_writes_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/objects/plants/records/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": {"record_id": "plant-1"}, "values": {
                    "name": [{"value": "Acme Plant"}],
                    "city": [{"value": "Mobile"}]
                }}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(format!("/lists/{}/entries/query", Config::default().pipeline_list_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().expect("create temp dir");
        let key_path = dir.path().join("api_key");
        std::fs::write(&key_path, "test-key\n").expect("write key");
        let config = Config {
            api_base_url: server.uri(),
            api_key_path: Some(key_path),
            output_path: dir.path().join("plants.json"),
            ..Config::default()
        };

        let summary = run(&config).await.expect("run");
        assert_eq!(summary.enrichment.records.len(), 1);

        let first = std::fs::read(&config.output_path).expect("read output");
        let written: Vec<MapRecord> = serde_json::from_slice(&first).expect("parse output");
        assert_eq!(written, summary.enrichment.records);
        assert_eq!(written[0].stage, "Not in Pipeline");

        // Unchanged backend gives byte-identical output
        run(&config).await.expect("second run");
        let second = std::fs::read(&config.output_path).expect("read output");
        assert_eq!(first, second);
    }
}
