//! Stage 1: raw records in, normalized + validated + deduplicated records
//! out. Validation runs before deduplication, so an under-specified
//! duplicate never shadows a fuller record that comes later.

pub mod dedupe;
pub mod text;
pub mod validate;

pub use dedupe::dedupe;
pub use text::{clean_text, normalize_company, normalize_title};
pub use validate::is_valid;

use crate::core::{CleanedRecord, RawRecord};

const DEFAULT_SOURCE: &str = "Unknown";
const DEFAULT_KIND: &str = "job";

/// Normalize a single raw record. Total: every field has a fallback, so
/// malformed input yields a well-typed record (which validation may still
/// reject).
pub fn normalize_record(raw: RawRecord) -> CleanedRecord {
    CleanedRecord {
        source: field_or(raw.source, DEFAULT_SOURCE),
        title: normalize_title(raw.title.as_deref().unwrap_or("")),
        company: normalize_company(raw.company.as_deref().unwrap_or("")),
        description: clean_text(raw.description.as_deref().unwrap_or("")),
        kind: field_or(raw.kind, DEFAULT_KIND),
        score: raw.score.unwrap_or(0),
    }
}

fn field_or(value: Option<String>, default: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Run the full cleaning stage: normalize, validate, deduplicate.
pub fn clean_records(records: Vec<RawRecord>) -> Vec<CleanedRecord> {
    let total = records.len();

    let validated: Vec<CleanedRecord> = records
        .into_iter()
        .map(normalize_record)
        .filter(is_valid)
        .collect();
    log::info!("validation kept {} of {} records", validated.len(), total);

    let unique = dedupe(validated);
    log::info!("deduplication kept {} records", unique.len());

    unique
}
