//! Writers for stage outputs: pretty JSON and CSV over any `Write`, plus
//! the simplified sample export used for manual review.

use std::io::Write;

use serde::Serialize;

use crate::core::{AnnotatedRecord, Annotations, CleanedRecord};

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// A record that knows how to render itself as a CSV row.
pub trait CsvRecord {
    fn header() -> &'static [&'static str];
    fn fields(&self) -> Vec<String>;
}

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_records<T: CsvRecord>(&mut self, records: &[T]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", T::header().join(","))?;
        for record in records {
            let row: Vec<String> = record.fields().iter().map(|f| escape_field(f)).collect();
            writeln!(self.writer, "{}", row.join(","))?;
        }
        Ok(())
    }
}

// RFC 4180 quoting: quote when the field contains a comma, quote or
// newline, doubling embedded quotes.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl CsvRecord for CleanedRecord {
    fn header() -> &'static [&'static str] {
        &["source", "title", "company", "description", "type", "score"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.source.clone(),
            self.title.clone(),
            self.company.clone(),
            self.description.clone(),
            self.kind.clone(),
            self.score.to_string(),
        ]
    }
}

impl CsvRecord for AnnotatedRecord {
    fn header() -> &'static [&'static str] {
        &[
            "source",
            "title",
            "company",
            "description",
            "type",
            "score",
            "skill_tags",
            "experience_level",
            "content_type",
            "relevance_score",
            "text_length",
            "has_requirements",
            "remote_work",
            "company_size",
        ]
    }

    fn fields(&self) -> Vec<String> {
        let mut fields = self.record.fields();
        let a = &self.annotations;
        fields.extend([
            a.skill_tags.join(", "),
            a.experience_level.as_str().to_string(),
            a.content_type.as_str().to_string(),
            a.relevance_score.to_string(),
            a.text_length.to_string(),
            a.has_requirements.to_string(),
            a.remote_work.to_string(),
            a.company_size.as_str().to_string(),
        ]);
        fields
    }
}

/// Simplified per-record view exported for annotation review.
#[derive(Debug, Serialize)]
pub struct SampleAnnotation<'a> {
    pub id: usize,
    pub title: &'a str,
    pub company: &'a str,
    pub description_preview: String,
    pub annotations: &'a Annotations,
}

const PREVIEW_CHARS: usize = 200;

/// Take the top `limit` records (the input is already relevance-ranked)
/// and flatten each into a review-friendly shape.
pub fn sample_annotations(records: &[AnnotatedRecord], limit: usize) -> Vec<SampleAnnotation<'_>> {
    records
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, record)| SampleAnnotation {
            id: i + 1,
            title: &record.record.title,
            company: &record.record.company,
            description_preview: preview(&record.record.description),
            annotations: &record.annotations,
        })
        .collect()
}

fn preview(description: &str) -> String {
    if description.chars().count() > PREVIEW_CHARS {
        let truncated: String = description.chars().take(PREVIEW_CHARS).collect();
        format!("{truncated}...")
    } else {
        description.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::Annotator;

    fn cleaned(title: &str, description: &str) -> CleanedRecord {
        CleanedRecord {
            source: "GitHub".into(),
            title: title.into(),
            company: "Acme".into(),
            description: description.into(),
            kind: "job".into(),
            score: 2,
        }
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        let records = vec![cleaned("Engineer", "fast, remote, well paid")];
        let mut buffer = Vec::new();
        CsvWriter::new(&mut buffer).write_records(&records).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "source,title,company,description,type,score"
        );
        assert_eq!(
            lines.next().unwrap(),
            "GitHub,Engineer,Acme,\"fast, remote, well paid\",job,2"
        );
    }

    #[test]
    fn csv_doubles_embedded_quotes() {
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("plain"), "plain");
    }

    #[test]
    fn annotated_csv_joins_skill_tags() {
        let annotator = Annotator::default();
        let records = annotator.annotate_all(&[cleaned("Engineer", "python and docker daily")]);
        let mut buffer = Vec::new();
        CsvWriter::new(&mut buffer).write_records(&records).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        // Machine Learning rides along: "daily" contains the trigger "ai".
        assert!(csv.contains("\"Python, DevOps, Machine Learning\""));
    }

    #[test]
    fn json_writer_emits_an_array() {
        let records = vec![cleaned("Engineer", "long enough text")];
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write(&records).unwrap();
        let parsed: Vec<CleanedRecord> =
            serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn sample_truncates_long_descriptions() {
        let long = "x".repeat(300);
        let annotator = Annotator::default();
        let records = annotator.annotate_all(&[cleaned("Engineer", &long)]);
        let samples = sample_annotations(&records, 20);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].id, 1);
        assert_eq!(samples[0].description_preview.chars().count(), 203);
        assert!(samples[0].description_preview.ends_with("..."));
    }

    #[test]
    fn sample_respects_the_limit() {
        let annotator = Annotator::default();
        let records = annotator.annotate_all(&[
            cleaned("A", "first long description"),
            cleaned("B", "second long description"),
            cleaned("C", "third long description"),
        ]);
        assert_eq!(sample_annotations(&records, 2).len(), 2);
    }
}
