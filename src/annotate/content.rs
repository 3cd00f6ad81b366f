use crate::config::ContentRule;
use crate::core::ContentType;

/// Source label identifying the Q&A-style origin.
const QA_SOURCE: &str = "StackOverflow";
/// Source label identifying the discussion-forum origin.
const FORUM_SOURCE: &str = "Reddit";

const FORUM_ADVICE_WORDS: [&str; 3] = ["advice", "help", "career"];
const JOB_FALLBACK_WORDS: [&str; 3] = ["apply", "position", "hiring"];

/// Single-label content classification, as an ordered fallback chain:
/// source sentinels first, then the keyword table in defined order, then
/// hiring words, then a question mark in the title, then the default.
///
/// The table scan can re-derive Career Advice / Job Description that the
/// earlier source and later fallback branches also cover; the redundancy
/// is intentional, since reordering silently changes ambiguous outcomes.
pub fn classify_content(
    title: &str,
    description: &str,
    source: &str,
    rules: &[ContentRule],
) -> ContentType {
    let combined = format!("{} {}", title, description).to_lowercase();

    if source == QA_SOURCE {
        return ContentType::InterviewQuestion;
    }
    if source == FORUM_SOURCE && FORUM_ADVICE_WORDS.iter().any(|w| combined.contains(w)) {
        return ContentType::CareerAdvice;
    }

    for rule in rules {
        if rule.triggers.iter().any(|t| combined.contains(t.as_str())) {
            return rule.kind;
        }
    }

    if JOB_FALLBACK_WORDS.iter().any(|w| combined.contains(w)) {
        return ContentType::JobDescription;
    }
    if title.contains('?') {
        return ContentType::InterviewQuestion;
    }
    ContentType::TechnicalDiscussion
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Taxonomy;

    fn classify(title: &str, description: &str, source: &str) -> ContentType {
        classify_content(title, description, source, &Taxonomy::default().content)
    }

    #[test]
    fn qa_source_wins_unconditionally() {
        assert_eq!(
            classify("We are hiring engineers", "apply for this position", "StackOverflow"),
            ContentType::InterviewQuestion
        );
    }

    #[test]
    fn forum_source_needs_an_advice_word() {
        assert_eq!(
            classify("Need help picking an offer", "...", "Reddit"),
            ContentType::CareerAdvice
        );
        // No advice word: falls through to the keyword table.
        assert_eq!(
            classify("Shipping culture at big companies", "our team and mission", "Reddit"),
            ContentType::CompanyInfo
        );
    }

    #[test]
    fn table_scan_returns_first_matching_category() {
        // "opportunity" (Job Description) appears before "interview" could
        // be considered; table order decides.
        assert_eq!(
            classify("Great opportunity", "prepare for the interview", "GitHub"),
            ContentType::JobDescription
        );
    }

    #[test]
    fn hiring_words_resolve_through_the_table_when_present_there() {
        // "apply" is also a Job Description table trigger, so with the
        // default table the answer comes from step (c), not the fallback.
        assert_eq!(
            classify("Come build with us", "apply today", "GitHub"),
            ContentType::JobDescription
        );
    }

    #[test]
    fn hiring_words_back_up_a_table_that_lacks_them() {
        let rules = vec![ContentRule {
            kind: ContentType::CompanyInfo,
            triggers: vec!["culture".to_string()],
        }];
        assert_eq!(
            classify_content("Come build with us", "apply today", "GitHub", &rules),
            ContentType::JobDescription
        );
    }

    #[test]
    fn question_mark_in_title_means_interview_question() {
        assert_eq!(
            classify("Is a linked list ever useful?", "", "GitHub"),
            ContentType::InterviewQuestion
        );
    }

    #[test]
    fn default_is_technical_discussion() {
        assert_eq!(
            classify("Notes on resizable arenas", "some prose", "GitHub"),
            ContentType::TechnicalDiscussion
        );
    }
}
