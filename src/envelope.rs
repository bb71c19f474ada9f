use serde::Serialize;
use serde_json::{Map, Value};

/// Uniform success/error wrapper returned by every boundary operation.
///
/// Payload fields flatten into the envelope object, so a successful parse
/// serializes as `{"success": true, "title": ..., "skills": ...}` rather
/// than nesting the record under a key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Envelope {
    /// Wrap a successful payload; object fields merge into the envelope.
    pub fn success(payload: Value) -> Self {
        Self {
            success: true,
            error: None,
            warning: None,
            payload: into_payload_map(payload),
        }
    }

    /// Successful payload with a warning-level signal attached.
    pub fn success_with_warning(payload: Value, warning: impl Into<String>) -> Self {
        let mut envelope = Self::success(payload);
        envelope.warning = Some(warning.into());
        envelope
    }

    /// Wrap a failure message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            warning: None,
            payload: Map::new(),
        }
    }

    /// Failure with extra context fields merged into the envelope.
    pub fn failure_with(message: impl Into<String>, extra: Value) -> Self {
        let mut envelope = Self::failure(message);
        envelope.payload = into_payload_map(extra);
        envelope
    }
}

fn into_payload_map(payload: Value) -> Map<String, Value> {
    match payload {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("payload".to_owned(), other);
            map
        }
    }
}
