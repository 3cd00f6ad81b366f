//! Runtime configuration: the keyword taxonomy plus a few output knobs.

mod loader;
mod taxonomy;

pub use loader::{load_config, parse_and_validate_config};
pub use taxonomy::{ContentRule, ExperienceRule, SkillRule, Taxonomy};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsiftConfig {
    /// Keyword tables; `None` means the built-in defaults.
    #[serde(default)]
    pub taxonomy: Option<Taxonomy>,

    /// How many skill tags the corpus summary ranks.
    #[serde(default = "default_top_skills")]
    pub top_skills: usize,

    /// How many top-relevance records the sample export keeps.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

impl Default for JobsiftConfig {
    fn default() -> Self {
        Self {
            taxonomy: None,
            top_skills: default_top_skills(),
            sample_size: default_sample_size(),
        }
    }
}

impl JobsiftConfig {
    pub fn taxonomy(&self) -> Taxonomy {
        self.taxonomy.clone().unwrap_or_default()
    }
}

pub(crate) fn default_top_skills() -> usize {
    10
}

pub(crate) fn default_sample_size() -> usize {
    20
}
