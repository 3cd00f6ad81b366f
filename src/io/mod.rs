//! File persistence for stage inputs and outputs. The pipeline itself
//! only sees in-memory sequences; everything here is the thin surface
//! around it.

pub mod output;

pub use output::{sample_annotations, CsvRecord, CsvWriter, JsonWriter, SampleAnnotation};

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::{JobsiftError, JobsiftResult, RawRecord};

pub fn read_raw_records(path: &Path) -> JobsiftResult<Vec<RawRecord>> {
    read_records(path)
}

pub fn read_cleaned_records(path: &Path) -> JobsiftResult<Vec<crate::core::CleanedRecord>> {
    read_records(path)
}

fn read_records<T: DeserializeOwned>(path: &Path) -> JobsiftResult<Vec<T>> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| JobsiftError::Parse(format!("{}: {}", path.display(), e)))
}

/// Write one stage output as `<stem>.json` and `<stem>.csv` under `dir`,
/// creating the directory if needed.
pub fn write_stage_output<T>(dir: &Path, stem: &str, records: &[T]) -> anyhow::Result<()>
where
    T: Serialize + CsvRecord,
{
    fs::create_dir_all(dir)?;

    let json_path = dir.join(format!("{stem}.json"));
    let file = fs::File::create(&json_path)?;
    JsonWriter::new(file).write(&records)?;

    let csv_path = dir.join(format!("{stem}.csv"));
    let file = fs::File::create(&csv_path)?;
    CsvWriter::new(file).write_records(records)?;

    log::info!(
        "wrote {} records to {} and {}",
        records.len(),
        json_path.display(),
        csv_path.display()
    );
    Ok(())
}

/// Write any serializable value as pretty JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    JsonWriter::new(file).write(value)?;
    Ok(())
}
