use regex::Regex;

/// Sentinel returned when no strategy locates a plausible title.
pub const UNDEFINED_ROLE: &str = "Undefined Role";

/// First-line fallback only applies to lines shorter than this.
const MAX_FIRST_LINE_TITLE_LEN: usize = 100;

/// Ordered title strategies; the first match wins. Each captures the title
/// in group 1: an explicit label, a leading clause before a role keyword,
/// or a leading clause before a "<N>+ years" token.
const TITLE_PATTERNS: [&str; 3] = [
    r"(?i)(?:Job Title|Position|Role):\s*([^\n]+)",
    r"(?i)^([^:]+?)(?:Job|Position|Role|Overview)",
    r"(?i)([^:]+?)\s+\d+\+?\s+years",
];

pub(crate) struct TitleMatcher {
    strategies: Vec<Regex>,
}

impl TitleMatcher {
    pub fn new() -> Result<Self, String> {
        let mut strategies = Vec::with_capacity(TITLE_PATTERNS.len());
        for pattern in TITLE_PATTERNS {
            let strategy = Regex::new(pattern)
                .map_err(|error| format!("invalid title pattern '{pattern}': {error}"))?;
            strategies.push(strategy);
        }
        Ok(Self { strategies })
    }

    /// Extract the job title, falling back to a short first line, then the
    /// sentinel.
    pub fn extract(&self, text: &str) -> String {
        for strategy in &self.strategies {
            if let Some(title) = strategy.captures(text).and_then(|captures| captures.get(1)) {
                return title.as_str().trim().to_owned();
            }
        }

        let first_line = text.trim().lines().next().unwrap_or("").trim();
        if !first_line.is_empty() && first_line.len() < MAX_FIRST_LINE_TITLE_LEN {
            return first_line.to_owned();
        }

        UNDEFINED_ROLE.to_owned()
    }
}
