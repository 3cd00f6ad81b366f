//! Stage 2: cleaned records in, annotated records out, ranked by relevance.
//!
//! Every label is derived from the record text and the configured keyword
//! taxonomy; the input record is never mutated.

pub mod company;
pub mod content;
pub mod experience;
pub mod relevance;
pub mod skills;

pub use company::estimate_company_size;
pub use content::classify_content;
pub use experience::classify_experience;
pub use relevance::relevance_score;
pub use skills::extract_skills;

use std::cmp::Ordering;

use crate::config::Taxonomy;
use crate::core::{AnnotatedRecord, Annotations, CleanedRecord};

const REQUIREMENT_MARKERS: [&str; 2] = ["requirements", "required"];

pub struct Annotator {
    taxonomy: Taxonomy,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(Taxonomy::default())
    }
}

impl Annotator {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Derive the full annotation block for one cleaned record.
    pub fn annotate(&self, record: &CleanedRecord) -> AnnotatedRecord {
        let full_text = format!("{} {}", record.title, record.description);
        let lowered = full_text.to_lowercase();

        let annotations = Annotations {
            skill_tags: extract_skills(&full_text, &self.taxonomy.skills),
            experience_level: classify_experience(&full_text, &self.taxonomy.experience),
            content_type: classify_content(
                &record.title,
                &record.description,
                &record.source,
                &self.taxonomy.content,
            ),
            relevance_score: relevance::round2(relevance_score(
                &full_text,
                &self.taxonomy.relevance_keywords,
            )),
            text_length: record.description.chars().count(),
            has_requirements: REQUIREMENT_MARKERS.iter().any(|m| lowered.contains(m)),
            remote_work: self
                .taxonomy
                .remote_indicators
                .iter()
                .any(|w| lowered.contains(w.as_str())),
            company_size: estimate_company_size(&record.company, &full_text, &self.taxonomy),
        };

        AnnotatedRecord {
            record: record.clone(),
            annotations,
        }
    }

    /// Annotate a cleaned sequence and rank it by descending relevance.
    pub fn annotate_all(&self, records: &[CleanedRecord]) -> Vec<AnnotatedRecord> {
        let mut annotated: Vec<AnnotatedRecord> = records.iter().map(|r| self.annotate(r)).collect();
        rank_by_relevance(&mut annotated);
        log::info!("annotated {} records", annotated.len());
        annotated
    }
}

/// Stable sort, so equal scores keep their pre-sort relative order.
pub fn rank_by_relevance(records: &mut [AnnotatedRecord]) {
    records.sort_by(|a, b| {
        b.annotations
            .relevance_score
            .partial_cmp(&a.annotations.relevance_score)
            .unwrap_or(Ordering::Equal)
    });
}
