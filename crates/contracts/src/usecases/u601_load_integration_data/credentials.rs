use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque authorization payload for an integration.
///
/// The widget never looks inside; it is forwarded as a JSON string in the
/// `credentials` form field. `Debug` does not print the payload.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(pub Value);

impl Credentials {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn empty() -> Self {
        Self(Value::Object(Default::default()))
    }

    /// JSON text sent as the form field value
    pub fn to_form_value(&self) -> String {
        self.0.to_string()
    }

    /// Parse a form field value. A JSON string holding JSON is unwrapped once.
    pub fn parse_form_value(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        match value {
            Value::String(inner) => Ok(Self(serde_json::from_str(&inner)?)),
            other => Ok(Self(other)),
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.0
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credentials(<redacted>)")
    }
}
