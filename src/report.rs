//! Output writer and stage summary.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::MapRecord;
use crate::pipeline::Enrichment;

/// Write records as indented JSON, replacing any previous file.
pub fn write_records(path: &Path, records: &[MapRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(records)?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), count = records.len(), "Wrote map records");
    Ok(())
}

/// Record count per stage, most common first.
/// Ties keep the order in which each stage first appears.
pub fn stage_counts(records: &[MapRecord]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for record in records {
        match index.get(record.stage.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(&record.stage, counts.len());
                counts.push((record.stage.clone(), 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Print fetch counts, the output location and the per-stage breakdown.
pub fn print_summary(path: &Path, enrichment: &Enrichment) {
    println!("Found {} plants", enrichment.plants_fetched);
    println!("Found {} pipeline entries", enrichment.pipeline_entries);
    println!(
        "Fetched {} of {} contacts",
        enrichment.contacts_fetched, enrichment.contacts_requested
    );
    println!();
    println!("Saved {} plants to {}", enrichment.records.len(), path.display());
    println!();
    println!("By Stage:");
    for (stage, count) in stage_counts(&enrichment.records) {
        println!("   {}: {}", stage, count);
    }
}
