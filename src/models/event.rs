use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Width of the dashed separator printed between event blocks.
pub const SEPARATOR_WIDTH: usize = 50;

/// Timestamps are shown as `YYYY-MM-DDTHH:MM:SS`, the first 19 characters of
/// the API value. Truncation is unconditional string slicing, not calendar
/// parsing.
const TIMESTAMP_WIDTH: usize = 19;

/// One element of the public-events feed from
/// `/users/{username}/events/public`.
///
/// Every field is kept as a raw `Value` so that a missing field and a
/// wrong-typed field read the same way: absent, rendered with a placeholder.
#[derive(Debug, Default, Deserialize)]
pub struct ActivityEvent {
    #[serde(rename = "type", default)]
    kind: Option<Value>,
    #[serde(default)]
    repo: Option<Value>,
    #[serde(default)]
    created_at: Option<Value>,
}

impl ActivityEvent {
    /// Decodes one array element. Non-object elements produce an all-default
    /// event rather than failing the whole feed.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    pub fn event_type(&self) -> &str {
        self.kind
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
    }

    pub fn repo_name(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|repo| repo.get("name"))
            .and_then(Value::as_str)
            .unwrap_or("N/A")
    }

    pub fn timestamp(&self) -> String {
        match self.created_at.as_ref().and_then(Value::as_str) {
            Some(raw) => raw.chars().take(TIMESTAMP_WIDTH).collect(),
            None => "N/A".to_string(),
        }
    }
}

impl fmt::Display for ActivityEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Event: {}", self.event_type())?;
        writeln!(f, "Repo: {}", self.repo_name())?;
        writeln!(f, "Time: {}", self.timestamp())?;
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))
    }
}
