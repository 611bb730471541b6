//! Feature Vector Builder - schema-aware reconstruction
//!
//! Two modes, chosen by the disease's input profile:
//!
//! - **Fixed**: read each profile field in order, default when absent or
//!   malformed.
//! - **Dynamic**: start from an all-zero vector over the artifact's schema,
//!   overlay numeric fields whose name exists in the schema, then set the
//!   dummy column `"{field}_{value}"` for each categorical field if and only
//!   if the schema has it.
//!
//! An unknown category in dynamic mode leaves every dummy for that field at
//! zero, which is how a drop-first encoding represents its baseline. This is
//! a defaulting policy, not a validation failure, so it is logged at debug
//! and never returned as an error.

use super::profile::{CategoricalSpec, FieldSpec, InputProfile};
use super::record::RawInputRecord;
use super::schema::FeatureSchema;
use super::vector::FeatureVector;

/// Build the vector for `profile` against `schema`.
///
/// For a fixed profile `schema` must hold the profile's columns; the model
/// loader guarantees this when it builds the artifact.
pub fn build_vector(
    profile: &InputProfile,
    schema: &FeatureSchema,
    record: &RawInputRecord,
) -> FeatureVector {
    match profile {
        InputProfile::Fixed { fields } => build_fixed(fields, schema, record),
        InputProfile::Dynamic { numeric, categorical } => {
            build_dynamic(numeric, categorical, schema, record)
        }
    }
}

/// Fixed-schema mode
pub fn build_fixed(
    fields: &[FieldSpec],
    schema: &FeatureSchema,
    record: &RawInputRecord,
) -> FeatureVector {
    let mut vector = FeatureVector::zeroed(schema);
    for field in fields {
        match schema.position(field.column) {
            Some(index) => vector.set(index, field.resolve(record)),
            None => log::warn!("Fixed field '{}' missing from schema", field.column),
        }
    }
    vector
}

/// Dynamic-schema mode
pub fn build_dynamic(
    numeric: &[FieldSpec],
    categorical: &[CategoricalSpec],
    schema: &FeatureSchema,
    record: &RawInputRecord,
) -> FeatureVector {
    let mut vector = FeatureVector::zeroed(schema);

    // Numeric / binary overlay by exact column name
    for field in numeric {
        if let Some(index) = schema.position(field.column) {
            vector.set(index, field.resolve(record));
        }
    }

    // One-hot reconstruction
    for spec in categorical {
        let value = spec.resolve(record);
        match schema.dummy_column(spec.field, &value) {
            Some(index) => vector.set(index, 1.0),
            None => log::debug!(
                "No dummy column {}_{} in schema; encoding '{}' as baseline",
                spec.field, value, spec.field
            ),
        }
    }

    vector
}
