#![forbid(unsafe_code)]

pub mod document;
pub mod envelope;
pub mod jd;
pub mod progress;
pub mod resume;
pub mod vocabulary;

use crate::document::ContentReader;
use crate::envelope::Envelope;
use crate::jd::JobDescriptionExtractor;
use crate::resume::ResumeExtractor;
use serde_json::json;
use std::path::Path;

/// Read a file into best-effort text for the orchestration layer.
///
/// Succeeds for every existing readable path. The payload carries the
/// decoded content and the decode method; a warning is attached when the
/// lossy terminal fallback produced the text.
pub fn read_file_content(reader: &ContentReader, path: &Path) -> Envelope {
    match reader.read(path) {
        Ok(decoded) => {
            let degraded = decoded.is_degraded();
            let payload = json!({
                "path": path.display().to_string(),
                "content": decoded.content,
                "method": decoded.method.label(),
            });
            if degraded {
                Envelope::success_with_warning(payload, "content recovered via lossy utf-8 decode")
            } else {
                Envelope::success(payload)
            }
        }
        Err(error) => Envelope::failure(error.to_string()),
    }
}

/// Parse job description text into structured fields.
///
/// Never fails on content: fields that cannot be located arrive empty or
/// as their sentinel values.
pub fn parse_job_description(extractor: &JobDescriptionExtractor, text: &str) -> Envelope {
    let record = extractor.parse(text);
    match serde_json::to_value(&record) {
        Ok(payload) => Envelope::success(payload),
        Err(error) => {
            Envelope::failure(format!("failed to serialize job description record: {error}"))
        }
    }
}

/// Parse resume text into structured fields.
///
/// Never fails on content: fields that cannot be located arrive empty or
/// as `null`.
pub fn parse_resume(extractor: &ResumeExtractor, text: &str) -> Envelope {
    let record = extractor.parse(text);
    match serde_json::to_value(&record) {
        Ok(payload) => Envelope::success(payload),
        Err(error) => Envelope::failure(format!("failed to serialize resume record: {error}")),
    }
}
