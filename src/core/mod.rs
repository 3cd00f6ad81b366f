pub mod types;

pub use types::{
    AnnotatedRecord, Annotations, CleanedRecord, CompanySize, ContentType, ExperienceLevel,
    JobsiftError, JobsiftResult, RawRecord,
};
