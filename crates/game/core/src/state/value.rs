//! Scalar values scripts can store in the variable table.

/// A script-visible scalar: what the editor's variable fields hold.
///
/// Serialized untagged, so the JSON form is the plain scalar
/// (`true`, `3.5`, `"west-gate"`) rather than a wrapper object.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    /// Numeric view; `None` for booleans and text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variants() {
        assert_eq!(Value::from(2.5).as_number(), Some(2.5));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from("gate").as_text(), Some("gate"));
        assert_eq!(Value::from("gate").as_number(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_bare_scalars() {
        assert_eq!(serde_json::to_string(&Value::from(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Value::from(3.0)).unwrap(), "3.0");
        assert_eq!(
            serde_json::to_string(&Value::from("hello")).unwrap(),
            "\"hello\""
        );

        let parsed: Value = serde_json::from_str("42.5").unwrap();
        assert_eq!(parsed, Value::Number(42.5));
    }
}
