use std::collections::HashSet;

use crate::core::CleanedRecord;

/// Identity for deduplication is the `(title, company)` pair only, folded
/// for case and surrounding whitespace. The joining underscore just keeps
/// the two fields apart in the key.
pub fn dedupe_key(record: &CleanedRecord) -> String {
    let title = record.title.to_lowercase();
    let company = record.company.to_lowercase();
    format!("{}_{}", title.trim(), company.trim())
}

/// Drop records whose key was already seen. Order-preserving and
/// first-occurrence-wins; duplicates are not reported.
pub fn dedupe(records: Vec<CleanedRecord>) -> Vec<CleanedRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(dedupe_key(record)))
        .collect()
}
