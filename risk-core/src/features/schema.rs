//! Feature Schema - ordered column list fixed at training time
//!
//! **The vector handed to a scaler must have exactly these columns, in this
//! order, with no extras and no omissions.**
//!
//! A schema is built once per artifact load and then only queried. The
//! fingerprint is a CRC32 over the ordered column names, so two schemas with
//! the same columns in a different order never compare equal.

use std::collections::HashMap;
use crc32fast::Hasher;

use crate::error::SchemaError;

// ============================================================================
// FEATURE SCHEMA
// ============================================================================

#[derive(Debug, Clone)]
pub struct FeatureSchema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    fingerprint: u32,
}

impl FeatureSchema {
    /// Build a schema from an ordered column list.
    ///
    /// Rejects empty lists and duplicated names.
    pub fn new<I, S>(columns: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(SchemaError::DuplicateColumn(name.clone()));
            }
        }

        let fingerprint = compute_fingerprint(&columns);

        Ok(Self { columns, index, fingerprint })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Column index by exact name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Column name by index
    pub fn column(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    /// Index of the one-hot column `"{field}_{value}"`, if training produced it.
    ///
    /// `None` means the category was unseen at training time or is the
    /// dropped baseline; both encode as all-zero dummies.
    pub fn dummy_column(&self, field: &str, value: &str) -> Option<usize> {
        self.position(&format!("{}_{}", field, value))
    }

    /// CRC32 of the ordered column names
    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }
}

impl PartialEq for FeatureSchema {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl Eq for FeatureSchema {}

fn compute_fingerprint(columns: &[String]) -> u32 {
    let mut hasher = Hasher::new();
    for name in columns {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }
    hasher.finalize()
}

// ============================================================================
// TESTS
// ============================================================================
