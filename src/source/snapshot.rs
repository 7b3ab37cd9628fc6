//! The status snapshot served by the posture monitor's `/data` endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::data::blink_text;
use crate::error::PollError;

/// One response from `/data`.
///
/// Every field is optional. Unknown fields are ignored, so the monitor
/// can add fields without breaking older dashboards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Posture status, normally `"Good"`, `"Warning"` or `"Unknown"`.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub posture: Option<String>,

    /// Head tilt status.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub tilt: Option<String>,

    /// Screen distance status.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,

    /// Blink count. The monitor sends it as a string; numbers are accepted too.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blink: Option<Value>,
}

impl StatusSnapshot {
    /// Parse a `/data` body. Fields are read by name, so anything other
    /// than a JSON object is rejected.
    pub fn from_slice(body: &[u8]) -> Result<Self, PollError> {
        let value: Value = serde_json::from_slice(body)?;
        let kind = match &value {
            Value::Object(_) => return Ok(serde_json::from_value(value)?),
            Value::Array(_) => "an array",
            Value::String(_) => "a string",
            Value::Number(_) => "a number",
            Value::Bool(_) => "a boolean",
            Value::Null => "null",
        };
        Err(PollError::Parse(format!("expected a JSON object, got {}", kind)))
    }

    /// Text the blink counter should show for this snapshot.
    pub fn blink_text(&self) -> String {
        blink_text(self.blink.as_ref())
    }
}

/// Accept any JSON scalar for a status field. Strings pass through,
/// `null` is treated as absent, other values keep their JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }))
}
