//! Raw form input, normalized to trimmed text.

use serde_json::Value;

/// A form value as the validator sees it: text with surrounding whitespace
/// removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput(String);

impl RawInput {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Only the ASCII digits of the input, in order.
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl From<&str> for RawInput {
    fn from(s: &str) -> Self {
        RawInput(s.trim().to_string())
    }
}

impl From<String> for RawInput {
    fn from(s: String) -> Self {
        RawInput::from(s.as_str())
    }
}

impl From<&String> for RawInput {
    fn from(s: &String) -> Self {
        RawInput::from(s.as_str())
    }
}

/// JSON scalars are rendered as the text a form field would hold. Values
/// with no textual form (`null`, booleans, arrays, objects) become empty.
impl From<&Value> for RawInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => RawInput::from(s.as_str()),
            Value::Number(n) => RawInput(n.to_string()),
            _ => RawInput::default(),
        }
    }
}

impl From<Option<&Value>> for RawInput {
    fn from(value: Option<&Value>) -> Self {
        value.map(RawInput::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(RawInput::from("  Alex \t").as_str(), "Alex");
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert!(RawInput::from("   ").is_empty());
    }

    #[test]
    fn digits_strips_separators() {
        assert_eq!(RawInput::from("+94 (71) 234-5678").digits(), "94712345678");
    }

    #[test]
    fn json_numbers_become_text() {
        assert_eq!(RawInput::from(&json!(712345678)).as_str(), "712345678");
    }

    #[test]
    fn non_textual_json_is_empty() {
        assert!(RawInput::from(&json!(null)).is_empty());
        assert!(RawInput::from(&json!(true)).is_empty());
        assert!(RawInput::from(&json!(["a"])).is_empty());
        assert!(RawInput::from(None).is_empty());
    }
}
