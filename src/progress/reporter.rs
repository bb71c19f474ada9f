use serde::Serialize;
use std::io::{self, Write};

/// Structured warning emitted to stderr when a decode degrades or a PDF
/// extraction falls back to a plain text read.
#[derive(Debug, Serialize)]
pub struct WarningEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub tool: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
}

/// Report a warning to stderr as JSONL with an optional warning code.
pub fn report_warning_code(path: &str, code: Option<&str>, message: &str) {
    let warning = WarningEvent {
        event_type: "warning".to_owned(),
        tool: "screener".to_owned(),
        path: path.to_owned(),
        code: code.map(str::to_owned),
        message: message.to_owned(),
    };
    let mut stderr = io::stderr().lock();
    let _ = write_event_line(&mut stderr, &warning);
}

fn write_event_line<T: Serialize>(out: &mut dyn Write, event: &T) -> Result<(), String> {
    serde_json::to_writer(&mut *out, event)
        .map_err(|error| format!("failed to serialize warning event: {error}"))?;
    out.write_all(b"\n")
        .map_err(|error| format!("failed to write warning event newline: {error}"))?;
    out.flush()
        .map_err(|error| format!("failed to flush warning event output: {error}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{WarningEvent, write_event_line};
    use serde_json::json;
    use std::io::Cursor;

    #[test]
    fn serializes_warning_event_without_code() {
        let event = WarningEvent {
            event_type: "warning".to_owned(),
            tool: "screener".to_owned(),
            path: "/resumes/candidate.pdf".to_owned(),
            code: None,
            message: "pdf text extraction returned empty content, trying text decode".to_owned(),
        };

        assert_eq!(
            serde_json::to_value(event).expect("serialize warning event"),
            json!({
                "type": "warning",
                "tool": "screener",
                "path": "/resumes/candidate.pdf",
                "message": "pdf text extraction returned empty content, trying text decode"
            })
        );
    }

    #[test]
    fn serializes_warning_event_with_code() {
        let event = WarningEvent {
            event_type: "warning".to_owned(),
            tool: "screener".to_owned(),
            path: "/postings/posting.txt".to_owned(),
            code: Some("W_DECODE_DEGRADED".to_owned()),
            message: "no chain encoding accepted the bytes, using lossy utf-8".to_owned(),
        };

        let value = serde_json::to_value(event).expect("serialize warning event");
        assert_eq!(value["code"], json!("W_DECODE_DEGRADED"));
        assert_eq!(value["tool"], json!("screener"));
    }

    #[test]
    fn writes_one_event_per_line() {
        let event = WarningEvent {
            event_type: "warning".to_owned(),
            tool: "screener".to_owned(),
            path: "a.pdf".to_owned(),
            code: None,
            message: "skipped".to_owned(),
        };
        let mut out = Cursor::new(Vec::new());

        write_event_line(&mut out, &event).expect("write warning event");

        let written = String::from_utf8(out.into_inner()).expect("valid utf-8 output");
        assert!(written.ends_with('\n'));
        assert_eq!(written.matches('\n').count(), 1);
    }
}
