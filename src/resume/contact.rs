use regex::Regex;
use serde::Serialize;

/// Contact fields; any of them may be absent from a resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_handle: Option<String>,
}

pub(crate) struct ContactMatcher {
    email: Regex,
    phone: Regex,
    linkedin: Regex,
}

impl ContactMatcher {
    pub fn new() -> Result<Self, String> {
        let email = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .map_err(|error| format!("invalid email pattern: {error}"))?;
        // Optional country code, flexible separators, optional area-code parens.
        let phone = Regex::new(r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
            .map_err(|error| format!("invalid phone pattern: {error}"))?;
        let linkedin = Regex::new(r"(?i)(?:linkedin\.com/in/|linkedin/|linkedin:)([A-Za-z0-9_-]+)")
            .map_err(|error| format!("invalid linkedin pattern: {error}"))?;

        Ok(Self {
            email,
            phone,
            linkedin,
        })
    }

    /// First match per field; `None` when a field is absent.
    pub fn extract(&self, text: &str) -> ContactInfo {
        ContactInfo {
            email: self
                .email
                .find(text)
                .map(|matched| matched.as_str().to_owned()),
            phone: self
                .phone
                .find(text)
                .map(|matched| matched.as_str().to_owned()),
            linkedin_handle: self
                .linkedin
                .captures(text)
                .and_then(|captures| captures.get(1))
                .map(|handle| handle.as_str().to_owned()),
        }
    }
}
