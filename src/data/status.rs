//! Status classification and display values.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A visual state class applied to a status card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    /// `status-good`
    Good,
    /// `status-warn`. Cleared on every update but never applied.
    Warn,
    /// `status-bad`
    Bad,
}

impl StatusClass {
    /// Every class an update clears before applying a new one.
    pub const ALL: [StatusClass; 3] = [StatusClass::Good, StatusClass::Warn, StatusClass::Bad];

    /// The CSS class name.
    pub fn css_class(self) -> &'static str {
        match self {
            StatusClass::Good => "status-good",
            StatusClass::Warn => "status-warn",
            StatusClass::Bad => "status-bad",
        }
    }

    /// Look up a status class by its CSS name.
    pub fn from_css_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.css_class() == class)
    }

    /// The class a reported status maps to.
    ///
    /// Only the exact strings `"Good"` and `"Warning"` are recognised;
    /// `"Warning"` maps to [`StatusClass::Bad`]. Anything else, including
    /// `"Unknown"` and a missing value, leaves the card neutral.
    pub fn for_status(status: Option<&str>) -> Option<Self> {
        match status {
            Some("Good") => Some(StatusClass::Good),
            Some("Warning") => Some(StatusClass::Bad),
            _ => None,
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Text shown for a blink count.
///
/// Falsy values (absent, `null`, `false`, `0`, `""`) show as `"0"`.
pub fn blink_text(blink: Option<&Value>) -> String {
    match blink {
        None | Some(Value::Null) | Some(Value::Bool(false)) => "0".to_string(),
        Some(Value::String(s)) if s.is_empty() => "0".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let f = n.as_f64().unwrap_or(0.0);
                if f == 0.0 {
                    "0".to_string()
                } else if f.fract() == 0.0 && f.abs() < 1e15 {
                    format!("{}", f as i64)
                } else {
                    f.to_string()
                }
            }
        }
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_for_status() {
        assert_eq!(StatusClass::for_status(Some("Good")), Some(StatusClass::Good));
        assert_eq!(StatusClass::for_status(Some("Warning")), Some(StatusClass::Bad));
        assert_eq!(StatusClass::for_status(Some("Unknown")), None);
        assert_eq!(StatusClass::for_status(Some("good")), None);
        assert_eq!(StatusClass::for_status(Some("")), None);
        assert_eq!(StatusClass::for_status(None), None);
    }

    #[test]
    fn test_warn_is_never_produced() {
        for status in ["Good", "Warning", "Warn", "Bad", "Unknown", ""] {
            assert_ne!(StatusClass::for_status(Some(status)), Some(StatusClass::Warn));
        }
    }

    #[test]
    fn test_css_class_names() {
        assert_eq!(StatusClass::Good.css_class(), "status-good");
        assert_eq!(StatusClass::Warn.css_class(), "status-warn");
        assert_eq!(StatusClass::Bad.css_class(), "status-bad");
        assert_eq!(StatusClass::from_css_class("status-bad"), Some(StatusClass::Bad));
        assert_eq!(StatusClass::from_css_class("card"), None);
    }

    #[test]
    fn test_blink_falsy_values() {
        assert_eq!(blink_text(None), "0");
        assert_eq!(blink_text(Some(&Value::Null)), "0");
        assert_eq!(blink_text(Some(&json!(0))), "0");
        assert_eq!(blink_text(Some(&json!(0.0))), "0");
        assert_eq!(blink_text(Some(&json!(""))), "0");
        assert_eq!(blink_text(Some(&json!(false))), "0");
    }

    #[test]
    fn test_blink_values() {
        assert_eq!(blink_text(Some(&json!("5"))), "5");
        assert_eq!(blink_text(Some(&json!(3))), "3");
        assert_eq!(blink_text(Some(&json!(12.0))), "12");
        assert_eq!(blink_text(Some(&json!(1.5))), "1.5");
    }
}
