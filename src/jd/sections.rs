use regex::Regex;

/// Bulleted line: •, *, -, or "N." followed by the item text.
const BULLET_PATTERN: &str = r"(?:•|\*|-|\d+\.)\s*([^\n•*\-\d.][^\n]+)";

/// Locates a titled section and pulls its bulleted or line-split items.
pub(crate) struct SectionMatcher {
    section: Regex,
    header: Regex,
    bullet: Regex,
}

impl SectionMatcher {
    /// Responsibilities/duties section, bounded by the next requirements
    /// or qualifications header.
    pub fn responsibilities() -> Result<Self, String> {
        Self::build(
            r"(?is)(?:responsibilities|duties|you will).*?(?:requirements|qualifications|$)",
            r"(?i)responsibilities|duties",
        )
    }

    /// Requirements/qualifications section, bounded by the benefits header.
    pub fn qualifications() -> Result<Self, String> {
        Self::build(
            r"(?is)(?:requirements|qualifications).*?(?:benefits|$)",
            r"(?i)requirements|qualifications",
        )
    }

    fn build(section_pattern: &str, header_pattern: &str) -> Result<Self, String> {
        let section = Regex::new(section_pattern)
            .map_err(|error| format!("invalid section pattern '{section_pattern}': {error}"))?;
        let header = Regex::new(header_pattern)
            .map_err(|error| format!("invalid header pattern '{header_pattern}': {error}"))?;
        let bullet = Regex::new(BULLET_PATTERN)
            .map_err(|error| format!("invalid bullet pattern: {error}"))?;

        Ok(Self {
            section,
            header,
            bullet,
        })
    }

    /// Extract items in document order; empty when the section is absent.
    ///
    /// Bulleted lines win; without bullets the section is split into
    /// non-empty trimmed lines, dropping a leading line that is itself the
    /// section header.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let Some(section) = self.section.find(text) else {
            return Vec::new();
        };
        let section_text = section.as_str();

        let bullets: Vec<String> = self
            .bullet
            .captures_iter(section_text)
            .filter_map(|captures| captures.get(1))
            .map(|item| item.as_str().trim().to_owned())
            .collect();
        if !bullets.is_empty() {
            return bullets;
        }

        let lines: Vec<String> = section_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        if lines.len() > 1 && self.header.is_match(&lines[0]) {
            return lines[1..].to_vec();
        }
        lines
    }
}
