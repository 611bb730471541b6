//! Raw Input Record - field → value mapping supplied by a caller
//!
//! Every field is optional. Lookups never fail: a value that cannot be
//! coerced is reported as absent and the caller substitutes its default.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RiskError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInputRecord {
    fields: Map<String, Value>,
}

impl RawInputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a decoded request body.
    ///
    /// Anything other than a JSON object is malformed; `null` is treated as
    /// an empty record so a bodiless request resolves entirely to defaults.
    pub fn from_value(value: Value) -> Result<Self, RiskError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            Value::Null => Ok(Self::new()),
            other => Err(RiskError::MalformedInput(format!(
                "expected a JSON object of fields, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Builder-style insert, mostly for tests and internal callers
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Numeric value of a field, or `None` if absent or not coercible.
    ///
    /// Numbers pass through, booleans become 1/0, strings are trimmed and
    /// parsed. Non-finite results count as absent.
    pub fn number(&self, field: &str) -> Option<f64> {
        let parsed = match self.fields.get(field)? {
            Value::Number(n) => n.as_f64(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        };
        parsed.filter(|v| v.is_finite())
    }

    /// Categorical code of a field, rendered as the string used in dummy
    /// column names (`1` → `"1"`, `"typical"` → `"typical"`).
    pub fn category(&self, field: &str) -> Option<String> {
        match self.fields.get(field)? {
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
            }
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for RawInputRecord {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
