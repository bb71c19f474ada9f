use regex::Regex;

/// Common technical terms scanned when a document carries no explicit
/// per-skill requirement, and for the resume skill inventory.
pub const SKILL_VOCABULARY: [&str; 41] = [
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "C++",
    "C#",
    "PHP",
    "Ruby",
    "Go",
    "SQL",
    "NoSQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "ML",
    "AI",
    "Machine Learning",
    "Deep Learning",
    "NLP",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Django",
    "Flask",
    "FastAPI",
    "Spring",
    "DevOps",
    "CI/CD",
    "Git",
    "Jenkins",
    "Terraform",
    "Ansible",
    "Agile",
    "Scrum",
];

/// Whole-word, case-insensitive matchers over the fixed skill vocabulary.
pub struct SkillVocabulary {
    matchers: Vec<(&'static str, Regex)>,
}

impl SkillVocabulary {
    /// Compile one whole-word matcher per vocabulary term.
    pub fn new() -> Result<Self, String> {
        let mut matchers = Vec::with_capacity(SKILL_VOCABULARY.len());
        for term in SKILL_VOCABULARY {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
            let matcher = Regex::new(&pattern)
                .map_err(|error| format!("invalid vocabulary pattern for '{term}': {error}"))?;
            matchers.push((term, matcher));
        }
        Ok(Self { matchers })
    }

    /// Terms present in `text`, in vocabulary order rather than document order.
    pub fn matches(&self, text: &str) -> Vec<&'static str> {
        self.matchers
            .iter()
            .filter(|(_, matcher)| matcher.is_match(text))
            .map(|(term, _)| *term)
            .collect()
    }
}
