mod sections;
mod skills;
mod title;

pub use title::UNDEFINED_ROLE;

use crate::jd::sections::SectionMatcher;
use crate::jd::skills::SkillMatcher;
use crate::jd::title::TitleMatcher;
use serde::Serialize;
use std::collections::BTreeMap;

/// Structured fields pulled from one job description. Immutable after
/// construction; re-parsing produces a new record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobDescriptionRecord {
    pub title: String,
    pub skills: BTreeMap<String, u32>,
    pub responsibilities: Vec<String>,
    pub qualifications: Vec<String>,
    pub raw_text: String,
}

/// Pattern-matching extractor for job description text.
///
/// Construction compiles every matcher once. Extraction never fails: a
/// field that cannot be located degrades to its empty or sentinel value,
/// and no field aborts extraction of the others.
pub struct JobDescriptionExtractor {
    title: TitleMatcher,
    skills: SkillMatcher,
    responsibilities: SectionMatcher,
    qualifications: SectionMatcher,
}

impl JobDescriptionExtractor {
    pub fn new() -> Result<Self, String> {
        Ok(Self {
            title: TitleMatcher::new()?,
            skills: SkillMatcher::new()?,
            responsibilities: SectionMatcher::responsibilities()?,
            qualifications: SectionMatcher::qualifications()?,
        })
    }

    /// Parse a full record, each field extracted independently.
    pub fn parse(&self, text: &str) -> JobDescriptionRecord {
        JobDescriptionRecord {
            title: self.extract_title(text),
            skills: self.extract_skills(text),
            responsibilities: self.extract_responsibilities(text),
            qualifications: self.extract_qualifications(text),
            raw_text: text.to_owned(),
        }
    }

    /// Job title, or the `UNDEFINED_ROLE` sentinel.
    pub fn extract_title(&self, text: &str) -> String {
        self.title.extract(text)
    }

    /// Required skills mapped to minimum years of experience.
    pub fn extract_skills(&self, text: &str) -> BTreeMap<String, u32> {
        self.skills.extract(text)
    }

    /// Responsibility items in document order.
    pub fn extract_responsibilities(&self, text: &str) -> Vec<String> {
        self.responsibilities.extract(text)
    }

    /// Qualification items in document order.
    pub fn extract_qualifications(&self, text: &str) -> Vec<String> {
        self.qualifications.extract(text)
    }
}

#[cfg(test)]
mod tests {
    use super::{JobDescriptionExtractor, UNDEFINED_ROLE};

    const POSTING: &str = "\
Job Title: Senior Backend Engineer

Responsibilities:
• Design and evolve the ingestion APIs
• Operate production services

Requirements:
- Java (5+ years)
- Python: 3 years

Benefits:
- Annual learning budget
";

    fn extractor() -> JobDescriptionExtractor {
        JobDescriptionExtractor::new().expect("build jd extractor")
    }

    #[test]
    fn parses_every_field_from_one_posting() {
        let record = extractor().parse(POSTING);

        assert_eq!(record.title, "Senior Backend Engineer");
        assert_eq!(record.skills.get("Java"), Some(&5));
        assert_eq!(record.skills.get("Python"), Some(&3));
        assert_eq!(
            record.responsibilities,
            vec![
                "Design and evolve the ingestion APIs",
                "Operate production services",
            ]
        );
        assert_eq!(
            record.qualifications,
            vec!["Java (5+ years)", "Python: 3 years"]
        );
        assert_eq!(record.raw_text, POSTING);
    }

    #[test]
    fn unmatched_text_degrades_every_field() {
        let record = extractor().parse("");

        assert_eq!(record.title, UNDEFINED_ROLE);
        assert!(record.skills.is_empty());
        assert!(record.responsibilities.is_empty());
        assert!(record.qualifications.is_empty());
    }

    #[test]
    fn parse_is_idempotent() {
        let extractor = extractor();
        assert_eq!(extractor.parse(POSTING), extractor.parse(POSTING));
    }

    #[test]
    fn record_serializes_with_flat_field_names() {
        let record = extractor().parse("Role: SRE");

        let value = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(value["title"], "SRE");
        assert!(value["skills"].is_object());
        assert!(value["responsibilities"].is_array());
    }
}
