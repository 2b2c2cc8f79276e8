//! Log entry type for JSONL logging.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single self-contained log line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonLogEntry {
    /// RFC 3339 timestamp with milliseconds
    pub ts: String,

    /// trace, debug, info, warn or error
    pub level: String,

    /// Name the session was started with (e.g. "lumen")
    pub session: String,

    /// Module path of the event (e.g. "lumen_core::controller")
    pub target: String,

    pub msg: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Enclosing spans, root first, joined with " > "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl JsonLogEntry {
    /// Create a new entry stamped with the current time.
    pub fn new(
        level: impl Into<String>,
        session: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            session: session.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_serialization() {
        let entry = JsonLogEntry::new("info", "lumen", "lumen_core::controller", "Theme cycled");

        let json = entry.to_json_line().unwrap();
        assert!(json.contains("\"level\":\"info\""));
        assert!(json.contains("\"session\":\"lumen\""));
        assert!(json.contains("\"msg\":\"Theme cycled\""));
        assert!(!json.contains("\"fields\""));

        let parsed = JsonLogEntry::from_json_line(&json).unwrap();
        assert_eq!(parsed.target, "lumen_core::controller");
    }

    #[test]
    fn test_log_entry_with_fields() {
        let entry = JsonLogEntry::new("debug", "lumen", "lumen::runtime", "Viewport settled")
            .with_fields(serde_json::json!({ "width": 1024, "height": 768 }))
            .with_span("page > resize");

        let json = entry.to_json_line().unwrap();
        assert!(json.contains("\"width\":1024"));
        assert!(json.contains("\"span\":\"page > resize\""));
    }
}
