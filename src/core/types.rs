//! Record types for every stage of the pipeline.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An as-scraped item. Any field may be absent, null, empty or carry a
/// non-string value; nothing here is validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub score: Option<i64>,
}

/// A raw record after normalization, validation and deduplication.
///
/// Invariants for records in a cleaned sequence: `title` is non-empty, the
/// trimmed `description` has at least 10 characters, and no two records
/// share the case-insensitive trimmed `(title, company)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub source: String,
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub score: i64,
}

/// Labels derived from a cleaned record. Immutable once attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotations {
    pub skill_tags: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub content_type: ContentType,
    pub relevance_score: f64,
    pub text_length: usize,
    pub has_requirements: bool,
    pub remote_work: bool,
    pub company_size: CompanySize,
}

/// A cleaned record plus its annotation block. Serializes flat, so the
/// wire shape is the cleaned fields and the annotation fields side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    #[serde(flatten)]
    pub record: CleanedRecord,
    #[serde(flatten)]
    pub annotations: Annotations,
}

/// Single-label experience classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry Level")]
    EntryLevel,
    #[serde(rename = "Mid Level")]
    MidLevel,
    #[serde(rename = "Senior Level")]
    SeniorLevel,
    #[serde(rename = "Management")]
    Management,
    #[serde(rename = "Not Specified")]
    NotSpecified,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::EntryLevel => "Entry Level",
            ExperienceLevel::MidLevel => "Mid Level",
            ExperienceLevel::SeniorLevel => "Senior Level",
            ExperienceLevel::Management => "Management",
            ExperienceLevel::NotSpecified => "Not Specified",
        }
    }
}

/// Single-label content classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "Job Description")]
    JobDescription,
    #[serde(rename = "Interview Question")]
    InterviewQuestion,
    #[serde(rename = "Career Advice")]
    CareerAdvice,
    #[serde(rename = "Technical Discussion")]
    TechnicalDiscussion,
    #[serde(rename = "Company Info")]
    CompanyInfo,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::JobDescription => "Job Description",
            ContentType::InterviewQuestion => "Interview Question",
            ContentType::CareerAdvice => "Career Advice",
            ContentType::TechnicalDiscussion => "Technical Discussion",
            ContentType::CompanyInfo => "Company Info",
        }
    }
}

/// Company size estimated from context clues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "Startup")]
    Startup,
    #[serde(rename = "Large Corporation")]
    LargeCorporation,
    #[serde(rename = "Medium Company")]
    MediumCompany,
}

impl CompanySize {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Startup => "Startup",
            CompanySize::LargeCorporation => "Large Corporation",
            CompanySize::MediumCompany => "Medium Company",
        }
    }
}

// Scraped feeds hand us whatever the upstream API produced; a number or
// object where a string belongs must degrade to "missing", not fail the run.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Error types for the application
#[derive(Debug, thiserror::Error)]
pub enum JobsiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type JobsiftResult<T> = Result<T, JobsiftError>;
