use serde::Deserialize;
use serde_json::Value;

/// Stage reported for plants that have no pipeline entry.
pub const NOT_IN_PIPELINE: &str = "Not in Pipeline";

/// Stage reported when an entry has a status but the status has no title.
const UNKNOWN_STAGE: &str = "Unknown";

// Response from the list entries query endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineResponse {
    #[serde(default)]
    pub data: Vec<PipelineEntry>,
}

// Fields stay loosely typed so one malformed entry can't fail the whole list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineEntry {
    #[serde(default)]
    pub parent_record_id: Value,
    #[serde(default)]
    pub entry_values: Value,
}

impl PipelineEntry {
    /// Parent plant id, if the entry has a non-empty string one.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_record_id.as_str().filter(|id| !id.is_empty())
    }

    /// Title of the first `stage` status, if the entry has one.
    pub fn stage(&self) -> Option<String> {
        let status = self
            .entry_values
            .get("stage")?
            .as_array()?
            .first()?
            .get("status")?
            .as_object()
            .filter(|status| !status.is_empty())?;

        let title = match status.get("title") {
            Some(Value::String(title)) => title.clone(),
            Some(Value::Null) | None => UNKNOWN_STAGE.to_string(),
            Some(other) => other.to_string(),
        };
        Some(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> PipelineEntry {
        serde_json::from_str(json).expect("Failed to parse pipeline entry JSON")
    }

    #[test]
    fn test_stage_title() {
        let entry = parse(
            r#"{"parent_record_id": "plant-1", "entry_values": {"stage": [{"status": {"id": "s1", "title": "Qualifying"}}]}}"#,
        );
        assert_eq!(entry.parent_id(), Some("plant-1"));
        assert_eq!(entry.stage().as_deref(), Some("Qualifying"));
    }

    #[test]
    fn test_stage_missing_title_is_unknown() {
        let entry = parse(
            r#"{"parent_record_id": "plant-1", "entry_values": {"stage": [{"status": {"id": "s1"}}]}}"#,
        );
        assert_eq!(entry.stage().as_deref(), Some("Unknown"));
    }

    #[test]
    fn test_entry_without_stage() {
        let entry = parse(r#"{"parent_record_id": "plant-1", "entry_values": {}}"#);
        assert_eq!(entry.stage(), None);

        let entry = parse(r#"{"parent_record_id": "plant-1", "entry_values": {"stage": []}}"#);
        assert_eq!(entry.stage(), None);

        let entry = parse(r#"{"parent_record_id": "plant-1", "entry_values": {"stage": [{"status": {}}]}}"#);
        assert_eq!(entry.stage(), None);
    }

    #[test]
    fn test_entry_with_malformed_fields() {
        let entry = parse(r#"{"parent_record_id": 12345, "entry_values": null}"#);
        assert_eq!(entry.parent_id(), None);
        assert_eq!(entry.stage(), None);

        let entry = parse(r#"{"parent_record_id": {"id": "x"}, "entry_values": {"stage": "Won"}}"#);
        assert_eq!(entry.parent_id(), None);
        assert_eq!(entry.stage(), None);
    }

    #[test]
    fn test_malformed_entry_does_not_fail_response() {
        let resp: PipelineResponse = serde_json::from_str(
            r#"{"data": [
                {"parent_record_id": "plant-1", "entry_values": {"stage": [{"status": {"title": "Qualifying"}}]}},
                {"parent_record_id": 12345, "entry_values": {}}
            ]}"#,
        )
        .expect("Failed to parse pipeline response JSON");
        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.data[0].parent_id(), Some("plant-1"));
        assert_eq!(resp.data[0].stage().as_deref(), Some("Qualifying"));
        assert_eq!(resp.data[1].parent_id(), None);
    }

    #[test]
    fn test_entry_without_parent() {
        let entry = parse(r#"{"entry_values": {"stage": [{"status": {"title": "Won"}}]}}"#);
        assert_eq!(entry.parent_id(), None);

        let entry = parse(r#"{"parent_record_id": "", "entry_values": {}}"#);
        assert_eq!(entry.parent_id(), None);
    }
}
