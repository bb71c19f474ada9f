use regex::Regex;
use serde::Serialize;

/// One parsed education entry. Overlapping degree patterns may each
/// contribute an entry for the same line; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: u16,
}

/// Placeholder when no institution clause follows the degree.
pub const UNKNOWN_INSTITUTION: &str = "Unknown";

/// Canonical degree spellings, short and long forms.
const DEGREE_PATTERNS: [&str; 5] = [
    r"(B\.?S\.?|Bachelor of Science|Bachelor's)",
    r"(M\.?S\.?|Master of Science|Master's)",
    r"(Ph\.?D\.?|Doctor of Philosophy)",
    r"(B\.?A\.?|Bachelor of Arts)",
    r"(M\.?B\.?A\.?|Master of Business Administration)",
];

pub(crate) struct EducationMatcher {
    section: Regex,
    degrees: Vec<Regex>,
    institution: Regex,
}

impl EducationMatcher {
    pub fn new() -> Result<Self, String> {
        let section = Regex::new(r"(?is)education.*?(?:experience|skills|$)")
            .map_err(|error| format!("invalid education section pattern: {error}"))?;

        let mut degrees = Vec::with_capacity(DEGREE_PATTERNS.len());
        for pattern in DEGREE_PATTERNS {
            let combined = format!(r"(?s){pattern}.*?(\d{{4}})");
            let degree = Regex::new(&combined)
                .map_err(|error| format!("invalid degree pattern '{pattern}': {error}"))?;
            degrees.push(degree);
        }

        let institution = Regex::new(r"(?:at|from|in)\s+([\w\s]+)")
            .map_err(|error| format!("invalid institution pattern: {error}"))?;

        Ok(Self {
            section,
            degrees,
            institution,
        })
    }

    /// Scan the education section for degree/year pairs. Each degree
    /// pattern scans independently; the institution is the clause after
    /// "at"/"from"/"in" within the matched span, defaulting to `"Unknown"`.
    pub fn extract(&self, text: &str) -> Vec<EducationEntry> {
        let Some(section) = self.section.find(text) else {
            return Vec::new();
        };
        let section_text = section.as_str();

        let mut entries = Vec::new();
        for degree in &self.degrees {
            for captures in degree.captures_iter(section_text) {
                let Some(degree_match) = captures.get(1) else {
                    continue;
                };
                let Some(year_match) = captures.get(2) else {
                    continue;
                };
                let Ok(year) = year_match.as_str().parse::<u16>() else {
                    continue;
                };

                let matched_span = captures.get(0).map(|span| span.as_str()).unwrap_or("");
                let institution = self
                    .institution
                    .captures(matched_span)
                    .and_then(|institution| institution.get(1))
                    .map(|institution| institution.as_str().trim().to_owned())
                    .filter(|institution| !institution.is_empty())
                    .unwrap_or_else(|| UNKNOWN_INSTITUTION.to_owned());

                entries.push(EducationEntry {
                    degree: degree_match.as_str().trim().to_owned(),
                    institution,
                    year,
                });
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::{EducationMatcher, UNKNOWN_INSTITUTION};

    fn matcher() -> EducationMatcher {
        EducationMatcher::new().expect("compile education patterns")
    }

    #[test]
    fn extracts_degree_institution_and_year() {
        let text = "Education\nM.S. from Carnegie Mellon University 2019\nExperience\n";

        let entries = matcher().extract(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "M.S.");
        assert_eq!(entries[0].institution, "Carnegie Mellon University 2019");
        assert_eq!(entries[0].year, 2019);
    }

    #[test]
    fn institution_defaults_to_unknown() {
        let text = "Education\nPh.D. 2016\nSkills\n";

        let entries = matcher().extract(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "Ph.D.");
        assert_eq!(entries[0].institution, UNKNOWN_INSTITUTION);
        assert_eq!(entries[0].year, 2016);
    }

    #[test]
    fn multiple_degrees_each_contribute_entries() {
        let text = "Education\nB.S. 2012\nM.S. 2014\nExperience\n";

        let entries = matcher().extract(text);
        let degrees: Vec<&str> = entries.iter().map(|entry| entry.degree.as_str()).collect();
        assert!(degrees.contains(&"B.S."));
        assert!(degrees.contains(&"M.S."));
    }

    #[test]
    fn no_education_section_yields_empty_list() {
        assert!(matcher().extract("Work history only.").is_empty());
    }

    #[test]
    fn degree_without_year_is_ignored() {
        let text = "Education\nB.A. in progress\nSkills\n";

        assert!(matcher().extract(text).is_empty());
    }

    #[test]
    fn long_form_degrees_are_recognized() {
        let text = "Education\nBachelor of Science, graduated 2015\nExperience\n";

        let entries = matcher().extract(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "Bachelor of Science");
        assert_eq!(entries[0].year, 2015);
    }
}
