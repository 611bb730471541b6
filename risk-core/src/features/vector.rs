//! Feature Vector - ordered model input for one request
//!
//! Built fresh per request by `builder`, consumed once by the scaler,
//! then dropped. Carries the fingerprint of the schema it was built
//! against so the adapter can catch a vector paired with the wrong model.

use std::collections::HashMap;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::schema::FeatureSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// CRC32 of the schema this vector was aligned to
    pub schema_fingerprint: u32,
    /// Values in schema column order
    values: Vec<f64>,
}

impl FeatureVector {
    /// Zeroed vector for a schema
    pub fn zeroed(schema: &FeatureSchema) -> Self {
        Self {
            schema_fingerprint: schema.fingerprint(),
            values: vec![0.0; schema.len()],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_values(schema: &FeatureSchema, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), schema.len());
        Self {
            schema_fingerprint: schema.fingerprint(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn get_by_name(&self, schema: &FeatureSchema, name: &str) -> Option<f64> {
        schema.position(name).and_then(|i| self.get(i))
    }

    pub(crate) fn set(&mut self, index: usize, value: f64) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }

    /// Whether this vector was built against `schema`
    pub fn matches(&self, schema: &FeatureSchema) -> bool {
        self.schema_fingerprint == schema.fingerprint() && self.values.len() == schema.len()
    }

    pub fn to_array(&self) -> Array1<f64> {
        Array1::from(self.values.clone())
    }

    /// JSON form with named values, for debug logging
    pub fn to_log_entry(&self, schema: &FeatureSchema) -> serde_json::Value {
        serde_json::json!({
            "schema_fingerprint": format!("{:08x}", self.schema_fingerprint),
            "values": self.values,
            "named_values": schema.columns().iter()
                .zip(self.values.iter())
                .map(|(name, value)| (name.clone(), *value))
                .collect::<HashMap<_, _>>(),
        })
    }
}
