use crate::vocabulary::SkillVocabulary;
use regex::Regex;

/// Vocabulary scan for the resume skill inventory, restricted to a
/// skills/technologies section when the resume has one.
pub(crate) struct SkillScanner {
    section: Regex,
    vocabulary: SkillVocabulary,
}

impl SkillScanner {
    pub fn new() -> Result<Self, String> {
        let section = Regex::new(
            r"(?s)(?:SKILLS|Skills|TECHNOLOGIES|Technologies).*?(?:EXPERIENCE|Experience|EDUCATION|Education|$)",
        )
        .map_err(|error| format!("invalid skills section pattern: {error}"))?;

        Ok(Self {
            section,
            vocabulary: SkillVocabulary::new()?,
        })
    }

    /// Matched vocabulary terms in vocabulary order, not document order.
    /// Falls back to scanning the whole text when no section is found.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let scan_text = self
            .section
            .find(text)
            .map(|section| section.as_str())
            .unwrap_or(text);

        self.vocabulary
            .matches(scan_text)
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}
