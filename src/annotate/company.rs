use crate::config::Taxonomy;
use crate::core::CompanySize;

/// Estimate company size from context clues in the company name and the
/// record text. Startup indicators take precedence over large-corporation
/// indicators when both match; anything else is a medium company.
pub fn estimate_company_size(company: &str, text: &str, taxonomy: &Taxonomy) -> CompanySize {
    let haystack = format!("{} {}", company, text).to_lowercase();

    if contains_any(&haystack, &taxonomy.startup_indicators) {
        CompanySize::Startup
    } else if contains_any(&haystack, &taxonomy.large_corp_indicators) {
        CompanySize::LargeCorporation
    } else {
        CompanySize::MediumCompany
    }
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(company: &str, text: &str) -> CompanySize {
        estimate_company_size(company, text, &Taxonomy::default())
    }

    #[test]
    fn startup_indicators_in_either_field() {
        assert_eq!(estimate("Seedling Labs", "we just closed our seed round"), CompanySize::Startup);
        assert_eq!(estimate("Acme", "an early stage team"), CompanySize::Startup);
    }

    #[test]
    fn startup_takes_precedence_over_large_corp() {
        assert_eq!(
            estimate("Acme", "fast-growing team inside a global enterprise"),
            CompanySize::Startup
        );
    }

    #[test]
    fn large_corp_indicators() {
        assert_eq!(
            estimate("Initech", "a fortune 500 with thousands of employees"),
            CompanySize::LargeCorporation
        );
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(estimate("Acme", "a normal shop"), CompanySize::MediumCompany);
    }
}
