use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ExperienceRule;
use crate::core::ExperienceLevel;

// Accepts "5 years", "5+ years", "5-years", "3 year".
static YEARS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)[+\-\s]*years?").unwrap());

/// Single-label experience classification. The rule table is scanned in
/// its defined order and the first trigger match wins; rule order is a
/// business rule, not an implementation detail. When no trigger matches,
/// the largest "<n> years" figure in the text decides; when there is none
/// either, the record is Not Specified.
pub fn classify_experience(text: &str, rules: &[ExperienceRule]) -> ExperienceLevel {
    if text.is_empty() {
        return ExperienceLevel::NotSpecified;
    }
    let haystack = text.to_lowercase();

    for rule in rules {
        if rule.triggers.iter().any(|t| haystack.contains(t.as_str())) {
            return rule.level;
        }
    }

    match max_years(&haystack) {
        Some(years) if years <= 2 => ExperienceLevel::EntryLevel,
        Some(years) if years <= 5 => ExperienceLevel::MidLevel,
        Some(_) => ExperienceLevel::SeniorLevel,
        None => ExperienceLevel::NotSpecified,
    }
}

fn max_years(haystack: &str) -> Option<u64> {
    YEARS_RE
        .captures_iter(haystack)
        .filter_map(|captures| captures[1].parse().ok())
        .max()
}
