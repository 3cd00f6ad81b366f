use crate::core::CleanedRecord;

/// Records with less description than this carry no usable signal.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Inclusion predicate, evaluated after normalization and before
/// deduplication. Rejection is a filtering decision, not an error.
pub fn is_valid(record: &CleanedRecord) -> bool {
    if record.title.trim().is_empty() {
        return false;
    }
    record.description.trim().chars().count() >= MIN_DESCRIPTION_CHARS
}
