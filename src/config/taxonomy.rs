//! Keyword taxonomy driving the classifiers.
//!
//! The tables are configuration data, not behavior: every category is a
//! label plus a list of lowercase trigger substrings, and the classifiers
//! only iterate them. Rule order is significant for the experience and
//! content tables (first match wins), so they are ordered sequences rather
//! than maps.

use serde::{Deserialize, Serialize};

use crate::core::{ContentType, ExperienceLevel};

/// A multi-label category: the label is free-form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRule {
    pub label: String,
    pub triggers: Vec<String>,
}

/// A single-label experience rule; the level is drawn from the fixed enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRule {
    pub level: ExperienceLevel,
    pub triggers: Vec<String>,
}

/// A single-label content rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRule {
    pub kind: ContentType,
    pub triggers: Vec<String>,
}

/// The complete keyword taxonomy. Defaults to the built-in software
/// engineering tables; any section can be overridden from `.jobsift.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(default = "default_skill_rules")]
    pub skills: Vec<SkillRule>,

    #[serde(default = "default_experience_rules")]
    pub experience: Vec<ExperienceRule>,

    #[serde(default = "default_content_rules")]
    pub content: Vec<ContentRule>,

    /// Technology keywords counted by the relevance scorer.
    #[serde(default = "default_relevance_keywords")]
    pub relevance_keywords: Vec<String>,

    /// Checked before the large-corporation indicators.
    #[serde(default = "default_startup_indicators")]
    pub startup_indicators: Vec<String>,

    #[serde(default = "default_large_corp_indicators")]
    pub large_corp_indicators: Vec<String>,

    #[serde(default = "default_remote_indicators")]
    pub remote_indicators: Vec<String>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            skills: default_skill_rules(),
            experience: default_experience_rules(),
            content: default_content_rules(),
            relevance_keywords: default_relevance_keywords(),
            startup_indicators: default_startup_indicators(),
            large_corp_indicators: default_large_corp_indicators(),
            remote_indicators: default_remote_indicators(),
        }
    }
}

impl Taxonomy {
    /// Matching is lowercase-substring based; fold user-supplied triggers
    /// so a mixed-case override still matches.
    pub fn normalize(&mut self) {
        for rule in &mut self.skills {
            lowercase_all(&mut rule.triggers);
        }
        for rule in &mut self.experience {
            lowercase_all(&mut rule.triggers);
        }
        for rule in &mut self.content {
            lowercase_all(&mut rule.triggers);
        }
        lowercase_all(&mut self.relevance_keywords);
        lowercase_all(&mut self.startup_indicators);
        lowercase_all(&mut self.large_corp_indicators);
        lowercase_all(&mut self.remote_indicators);
    }

    /// A taxonomy with an empty trigger list silently disables a category;
    /// surface that as a config error instead.
    pub fn validate(&self) -> Result<(), String> {
        let empty_skill = self.skills.iter().find(|r| r.triggers.is_empty());
        if let Some(rule) = empty_skill {
            return Err(format!("skill category '{}' has no triggers", rule.label));
        }
        if let Some(rule) = self.experience.iter().find(|r| r.triggers.is_empty()) {
            return Err(format!(
                "experience level '{}' has no triggers",
                rule.level.as_str()
            ));
        }
        if let Some(rule) = self.content.iter().find(|r| r.triggers.is_empty()) {
            return Err(format!(
                "content type '{}' has no triggers",
                rule.kind.as_str()
            ));
        }
        Ok(())
    }
}

fn lowercase_all(triggers: &mut [String]) {
    for trigger in triggers {
        if trigger.chars().any(|c| c.is_uppercase()) {
            *trigger = trigger.to_lowercase();
        }
    }
}

fn skill(label: &str, triggers: &[&str]) -> SkillRule {
    SkillRule {
        label: label.to_string(),
        triggers: triggers.iter().map(|t| t.to_string()).collect(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub(crate) fn default_skill_rules() -> Vec<SkillRule> {
    vec![
        skill(
            "Python",
            &["python", "django", "flask", "fastapi", "pandas", "numpy"],
        ),
        skill(
            "JavaScript",
            &["javascript", "js", "node", "react", "vue", "angular", "express"],
        ),
        skill("Java", &["java", "spring", "hibernate", "maven", "gradle"]),
        skill(
            "DevOps",
            &["docker", "kubernetes", "aws", "azure", "gcp", "terraform", "jenkins"],
        ),
        skill(
            "Database",
            &["sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch"],
        ),
        skill(
            "Machine Learning",
            &["ml", "ai", "tensorflow", "pytorch", "sklearn", "data science"],
        ),
        skill(
            "Cloud",
            &["aws", "azure", "gcp", "cloud", "serverless", "lambda"],
        ),
        skill(
            "Frontend",
            &["html", "css", "react", "vue", "angular", "typescript"],
        ),
        skill(
            "Backend",
            &["api", "rest", "graphql", "microservices", "database"],
        ),
        skill(
            "Mobile",
            &["ios", "android", "react native", "flutter", "swift", "kotlin"],
        ),
    ]
}

pub(crate) fn default_experience_rules() -> Vec<ExperienceRule> {
    vec![
        ExperienceRule {
            level: ExperienceLevel::EntryLevel,
            triggers: strings(&[
                "entry", "junior", "graduate", "intern", "0-2 years", "beginner", "new grad",
            ]),
        },
        ExperienceRule {
            level: ExperienceLevel::MidLevel,
            triggers: strings(&["mid", "intermediate", "2-5 years", "3-5 years", "experienced"]),
        },
        ExperienceRule {
            level: ExperienceLevel::SeniorLevel,
            triggers: strings(&[
                "senior", "sr", "lead", "5+ years", "6+ years", "expert", "principal",
            ]),
        },
        ExperienceRule {
            level: ExperienceLevel::Management,
            triggers: strings(&[
                "manager", "mgr", "director", "vp", "head of", "team lead", "tech lead",
            ]),
        },
    ]
}

pub(crate) fn default_content_rules() -> Vec<ContentRule> {
    vec![
        ContentRule {
            kind: ContentType::JobDescription,
            triggers: strings(&[
                "hiring", "position", "role", "opportunity", "apply", "requirements",
            ]),
        },
        ContentRule {
            kind: ContentType::InterviewQuestion,
            triggers: strings(&["interview", "question", "how to", "explain", "what is", "why"]),
        },
        ContentRule {
            kind: ContentType::CareerAdvice,
            triggers: strings(&[
                "career", "advice", "tips", "how to become", "path", "guidance",
            ]),
        },
        ContentRule {
            kind: ContentType::TechnicalDiscussion,
            triggers: strings(&["discussion", "best practices", "comparison", "vs", "opinion"]),
        },
        ContentRule {
            kind: ContentType::CompanyInfo,
            triggers: strings(&["company", "culture", "benefits", "team", "about us", "mission"]),
        },
    ]
}

pub(crate) fn default_relevance_keywords() -> Vec<String> {
    strings(&[
        "software",
        "developer",
        "engineer",
        "programming",
        "code",
        "development",
        "python",
        "java",
        "javascript",
        "react",
        "node",
        "api",
        "database",
        "cloud",
        "aws",
        "docker",
        "git",
        "algorithm",
        "data structure",
    ])
}

pub(crate) fn default_startup_indicators() -> Vec<String> {
    strings(&["startup", "seed", "series a", "early stage", "fast-growing"])
}

pub(crate) fn default_large_corp_indicators() -> Vec<String> {
    strings(&["fortune", "enterprise", "global", "multinational", "thousands"])
}

pub(crate) fn default_remote_indicators() -> Vec<String> {
    strings(&["remote", "work from home", "distributed", "telecommute"])
}
