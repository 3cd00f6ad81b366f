/// Denominator for the keyword count; ten distinct hits saturate the base
/// score even though the keyword list is longer.
const KEYWORD_SATURATION: f64 = 10.0;
/// One point of length bonus per thousand characters, capped.
const LENGTH_BONUS_SCALE: f64 = 1000.0;
const LENGTH_BONUS_CAP: f64 = 0.2;

/// Heuristic relevance in [0, 1]: keyword density plus a small bonus for
/// longer, more detailed text. Empty text scores exactly 0.0. Monotonic
/// non-decreasing in the number of matching keywords.
pub fn relevance_score(text: &str, keywords: &[String]) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let haystack = text.to_lowercase();
    let found = keywords
        .iter()
        .filter(|k| haystack.contains(k.as_str()))
        .count();

    let base = (found as f64 / KEYWORD_SATURATION).min(1.0);
    let bonus = (text.chars().count() as f64 / LENGTH_BONUS_SCALE).min(LENGTH_BONUS_CAP);
    (base + bonus).min(1.0)
}

/// Scores are reported at two decimals.
pub fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Taxonomy;

    fn score(text: &str) -> f64 {
        relevance_score(text, &Taxonomy::default().relevance_keywords)
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(score(""), 0.0);
    }

    #[test]
    fn unrelated_text_gets_only_the_length_bonus() {
        let text = "gardening tips for the summer months";
        let expected = text.chars().count() as f64 / 1000.0;
        assert!((score(text) - expected).abs() < 1e-9);
    }

    #[test]
    fn monotonic_in_keyword_count_for_fixed_length() {
        // Same length, increasing keyword counts.
        let none = "xxxxxxxx xxxxxx xxx";
        let one = "python xxxxxxx xxxx";
        let two = "python docker xxxxx";
        assert_eq!(none.chars().count(), one.chars().count());
        assert_eq!(one.chars().count(), two.chars().count());
        assert!(score(none) < score(one));
        assert!(score(one) < score(two));
    }

    #[test]
    fn bounded_above_by_one() {
        let stacked = "software developer engineer programming code development \
                       python java javascript react node api database cloud aws \
                       docker git algorithm data structure"
            .repeat(20);
        assert_eq!(score(&stacked), 1.0);
    }

    #[test]
    fn round2_reports_two_decimals() {
        assert_eq!(round2(0.23500001), 0.24);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(1.0), 1.0);
    }
}
