//! Text normalization: entity decoding, markup stripping, whitespace and
//! charset policy, plus the title/company canonical forms.

use once_cell::sync::Lazy;
use regex::Regex;

pub const UNKNOWN_POSITION: &str = "Unknown Position";
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
// Word characters, whitespace and basic punctuation survive; everything
// else (emoji, markup leftovers, control noise) is dropped.
static CHARSET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.,!?\-()/]").unwrap());
static LEGAL_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(Inc|Ltd|LLC|Corp|Corporation|Company|Co)\b\.?").unwrap());

// Applied to the title-cased form, so matching is case-sensitive.
static ABBREVIATIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [("Sr", "Senior"), ("Jr", "Junior"), ("Mgr", "Manager")]
        .iter()
        .map(|(abbr, full)| (Regex::new(&format!(r"\b{abbr}\b")).unwrap(), *full))
        .collect()
});

/// Normalize arbitrary scraped text. Decodes HTML entities, replaces tags
/// with a space, drops characters outside the allowed set, collapses
/// whitespace runs and trims. Total: any input yields a well-formed
/// string, and the function is idempotent.
///
/// The charset filter runs before the whitespace collapse; the other way
/// around, dropping a character between two spaces would leave a double
/// space behind and break idempotence.
pub fn clean_text(raw: &str) -> String {
    let text = html_escape::decode_html_entities(raw);
    let text = TAG_RE.replace_all(&text, " ");
    let text = CHARSET_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Canonical company form: cleaned, legal-entity suffixes removed as whole
/// words, title-cased. Empty results map to the "Unknown Company" sentinel.
pub fn normalize_company(raw: &str) -> String {
    let cleaned = clean_text(raw);
    let stripped = LEGAL_SUFFIX_RE.replace_all(&cleaned, "");
    let titled = title_case(&stripped);
    let titled = titled.trim();
    if titled.is_empty() {
        UNKNOWN_COMPANY.to_string()
    } else {
        titled.to_string()
    }
}

/// Canonical title form: cleaned, title-cased, with Sr/Jr/Mgr expanded.
/// Empty results map to the "Unknown Position" sentinel.
pub fn normalize_title(raw: &str) -> String {
    let mut titled = title_case(&clean_text(raw));
    for (pattern, replacement) in ABBREVIATIONS.iter() {
        titled = pattern.replace_all(&titled, *replacement).into_owned();
    }
    let titled = titled.trim();
    if titled.is_empty() {
        UNKNOWN_POSITION.to_string()
    } else {
        titled.to_string()
    }
}

/// Title-case in the Python `str.title()` sense: an alphabetic character is
/// uppercased when it follows a non-alphabetic one, lowercased otherwise.
/// Non-alphabetic characters pass through, so interior spacing survives.
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alphabetic = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_strips_tags_and_entities() {
        assert_eq!(
            clean_text("<p>Senior &amp; Staff   engineers</p>"),
            "Senior Staff engineers"
        );
    }

    #[test]
    fn clean_text_replaces_tags_with_a_space() {
        // Tag boundaries must not glue adjacent words together.
        assert_eq!(clean_text("remote<br>work"), "remote work");
    }

    #[test]
    fn clean_text_keeps_basic_punctuation_only() {
        assert_eq!(
            clean_text("C++ devs wanted! (remote, 50/50 on-site) @acme #jobs"),
            "C devs wanted! (remote, 50/50 on-site) acme jobs"
        );
    }

    #[test]
    fn clean_text_handles_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\t "), "");
    }

    #[test]
    fn clean_text_is_idempotent_on_fixtures() {
        let samples = [
            "<div>Nested <b>bold &lt;tags&gt;</b></div>",
            "plain text already",
            "tabs\tand\nnewlines",
            "&amp;amp; double encoded",
            // Dropped characters between spaces must not leave a gap.
            "salary a & b # c",
        ];
        for sample in samples {
            let once = clean_text(sample);
            assert_eq!(clean_text(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn normalize_company_removes_legal_suffixes() {
        assert_eq!(normalize_company("ACME Corp."), "Acme");
        assert_eq!(normalize_company("initech inc"), "Initech");
        assert_eq!(normalize_company("Wayne Enterprises Ltd"), "Wayne Enterprises");
    }

    #[test]
    fn normalize_company_falls_back_to_sentinel() {
        assert_eq!(normalize_company(""), UNKNOWN_COMPANY);
        assert_eq!(normalize_company("  <b></b> "), UNKNOWN_COMPANY);
        // Nothing left once the suffix is gone.
        assert_eq!(normalize_company("Inc."), UNKNOWN_COMPANY);
    }

    #[test]
    fn normalize_title_expands_abbreviations() {
        assert_eq!(normalize_title("sr software engineer"), "Senior Software Engineer");
        assert_eq!(normalize_title("JR dev"), "Junior Dev");
        assert_eq!(normalize_title("engineering MGR"), "Engineering Manager");
    }

    #[test]
    fn normalize_title_falls_back_to_sentinel() {
        assert_eq!(normalize_title(""), UNKNOWN_POSITION);
        assert_eq!(normalize_title("<script></script>"), UNKNOWN_POSITION);
    }

    #[test]
    fn title_case_matches_python_semantics() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("o'brien and sons"), "O'Brien And Sons");
        assert_eq!(title_case("3d artist"), "3D Artist");
        assert_eq!(title_case("ALL CAPS"), "All Caps");
        assert_eq!(title_case("two  spaces"), "Two  Spaces");
    }
}
