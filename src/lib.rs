// Export modules for library usage
pub mod annotate;
pub mod cleaning;
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    AnnotatedRecord, Annotations, CleanedRecord, CompanySize, ContentType, ExperienceLevel,
    JobsiftError, JobsiftResult, RawRecord,
};

pub use crate::annotate::{
    classify_content, classify_experience, estimate_company_size, extract_skills, relevance_score,
    Annotator,
};

pub use crate::cleaning::{clean_records, clean_text, dedupe, is_valid, normalize_company,
    normalize_title};

pub use crate::config::{load_config, JobsiftConfig, Taxonomy};

pub use crate::report::{cleaning_stats, summarize, CleaningStats, CorpusSummary, SkillCount};
