use crate::vocabulary::SkillVocabulary;
use regex::Regex;
use std::collections::BTreeMap;

/// Minimum-years value used when a numeral is missing or unparseable.
const DEFAULT_YEARS: u32 = 1;

/// Surface forms for (skill, years) requirements. Every match across every
/// pattern writes into the result map, so for a skill mentioned in several
/// forms the last processed match keeps its value.
///
/// The second tuple element marks the inverted form whose captured groups
/// arrive as (years, skill).
const SKILL_PATTERN_SPECS: [(&str, bool); 4] = [
    // "Python: 3 years"
    (r"(?i)(\w+(?:\s+\w+)?):\s*(\d+)\+?\s*(?:years|yrs)", false),
    // "Python (3+ years)"
    (r"(?i)(\w+(?:\s+\w+)?)\s*\((\d+)\+?\s*(?:years|yrs)?\)", false),
    // "Python with 3 years" (also bare "Python 3 years")
    (r"(?i)(\w+(?:\s+\w+)??)\s*(?:with)?\s*(\d+)\+?\s*(?:years|yrs)", false),
    // "3+ years of Python"
    (r"(?i)(\d+)\+?\s*(?:years|yrs)(?:\s*of)?\s*(\w+(?:\s+\w+)?)", true),
];

struct SkillPattern {
    regex: Regex,
    years_first: bool,
}

pub(crate) struct SkillMatcher {
    patterns: Vec<SkillPattern>,
    vocabulary: SkillVocabulary,
}

impl SkillMatcher {
    pub fn new() -> Result<Self, String> {
        let mut patterns = Vec::with_capacity(SKILL_PATTERN_SPECS.len());
        for (pattern, years_first) in SKILL_PATTERN_SPECS {
            let regex = Regex::new(pattern)
                .map_err(|error| format!("invalid skill pattern '{pattern}': {error}"))?;
            patterns.push(SkillPattern { regex, years_first });
        }

        Ok(Self {
            patterns,
            vocabulary: SkillVocabulary::new()?,
        })
    }

    /// Extract (skill, minimum years) requirements from the whole text.
    ///
    /// When no pattern matches at all, falls back to scanning the shared
    /// vocabulary with every found term at the default one-year minimum.
    pub fn extract(&self, text: &str) -> BTreeMap<String, u32> {
        let mut skills = BTreeMap::new();

        for pattern in &self.patterns {
            for captures in pattern.regex.captures_iter(text) {
                let (skill_group, years_group) = if pattern.years_first { (2, 1) } else { (1, 2) };
                let Some(skill) = captures.get(skill_group) else {
                    continue;
                };
                let Some(years) = captures.get(years_group) else {
                    continue;
                };

                let years = years
                    .as_str()
                    .trim()
                    .parse::<u32>()
                    .unwrap_or(DEFAULT_YEARS)
                    .max(DEFAULT_YEARS);
                skills.insert(skill.as_str().trim().to_owned(), years);
            }
        }

        if skills.is_empty() {
            for term in self.vocabulary.matches(text) {
                skills.insert(term.to_owned(), DEFAULT_YEARS);
            }
        }

        skills
    }
}
