use crate::config::SkillRule;

/// Multi-label skill extraction: a category is tagged when any of its
/// triggers appears as a substring of the lowercased text, and at most
/// once. Categories are not mutually exclusive ("aws" tags both DevOps and
/// Cloud). Tags come out in table order.
pub fn extract_skills(text: &str, rules: &[SkillRule]) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let haystack = text.to_lowercase();
    rules
        .iter()
        .filter(|rule| rule.triggers.iter().any(|t| haystack.contains(t.as_str())))
        .map(|rule| rule.label.clone())
        .collect()
}
