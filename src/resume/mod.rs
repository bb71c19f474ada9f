mod contact;
mod education;
mod skills;

pub use contact::ContactInfo;
pub use education::{EducationEntry, UNKNOWN_INSTITUTION};

use crate::resume::contact::ContactMatcher;
use crate::resume::education::EducationMatcher;
use crate::resume::skills::SkillScanner;
use serde::Serialize;

/// Structured fields pulled from one resume. Immutable after construction;
/// re-parsing produces a new record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeRecord {
    pub contact: ContactInfo,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub raw_text: String,
}

/// Pattern-matching extractor for resume text.
///
/// Construction compiles every matcher once. Extraction never fails: every
/// field degrades independently to `None` or an empty list.
pub struct ResumeExtractor {
    contact: ContactMatcher,
    education: EducationMatcher,
    skills: SkillScanner,
}

impl ResumeExtractor {
    pub fn new() -> Result<Self, String> {
        Ok(Self {
            contact: ContactMatcher::new()?,
            education: EducationMatcher::new()?,
            skills: SkillScanner::new()?,
        })
    }

    /// Parse a full record, each field extracted independently.
    pub fn parse(&self, text: &str) -> ResumeRecord {
        ResumeRecord {
            contact: self.extract_contact(text),
            education: self.extract_education(text),
            skills: self.extract_skills(text),
            raw_text: text.to_owned(),
        }
    }

    /// Email, phone, and LinkedIn handle, each optional.
    pub fn extract_contact(&self, text: &str) -> ContactInfo {
        self.contact.extract(text)
    }

    /// Education entries in degree-pattern scan order.
    pub fn extract_education(&self, text: &str) -> Vec<EducationEntry> {
        self.education.extract(text)
    }

    /// Vocabulary skills, in vocabulary order.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        self.skills.extract(text)
    }
}

#[cfg(test)]
mod tests {
    use super::ResumeExtractor;

    const RESUME: &str = "\
Jane Doe
jane.doe@example.com
linkedin.com/in/janedoe

Skills
Python, Docker, PostgreSQL

Education
B.S. from State University 2015
";

    fn extractor() -> ResumeExtractor {
        ResumeExtractor::new().expect("build resume extractor")
    }

    #[test]
    fn parses_every_field_from_one_resume() {
        let record = extractor().parse(RESUME);

        assert_eq!(record.contact.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(record.contact.phone, None);
        assert_eq!(record.contact.linkedin_handle.as_deref(), Some("janedoe"));
        assert_eq!(record.skills, vec!["Python", "PostgreSQL", "Docker"]);
        assert_eq!(record.education.len(), 1);
        assert_eq!(record.education[0].degree, "B.S.");
        assert_eq!(record.education[0].year, 2015);
        assert_eq!(record.raw_text, RESUME);
    }

    #[test]
    fn empty_text_degrades_every_field() {
        let record = extractor().parse("");

        assert_eq!(record.contact.email, None);
        assert!(record.education.is_empty());
        assert!(record.skills.is_empty());
    }

    #[test]
    fn parse_is_idempotent() {
        let extractor = extractor();
        assert_eq!(extractor.parse(RESUME), extractor.parse(RESUME));
    }
}
