use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use prosody_tiers::BatchSummary;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SummaryReport<'a> {
    schema_version: u32,
    meta: Meta<'a>,
    summary: &'a BatchSummary,
}

#[derive(Debug, Serialize)]
struct Meta<'a> {
    generated_at: String,
    command: &'a str,
}

pub fn write_summary(path: &Path, command: &str, summary: &BatchSummary) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            format!(
                "Failed to create summary output directory '{}': {err}",
                parent.display()
            )
        })?;
    }

    let report = SummaryReport {
        schema_version: 1,
        meta: Meta {
            generated_at: Utc::now().to_rfc3339(),
            command,
        },
        summary,
    };

    let mut file = File::create(path)
        .map_err(|err| format!("Failed to create summary file '{}': {err}", path.display()))?;
    serde_json::to_writer_pretty(&mut file, &report).map_err(|err| {
        format!(
            "Failed to serialize summary JSON '{}': {err}",
            path.display()
        )
    })?;
    file.write_all(b"\n")
        .map_err(|err| format!("Failed to finalize summary file '{}': {err}", path.display()))?;
    Ok(())
}
