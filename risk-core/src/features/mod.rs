//! Features Module - request → model input alignment
//!
//! - `schema`: ordered, de-duplicated column list with fingerprint
//! - `record`: raw caller fields with lenient coercion
//! - `profile`: per-disease field specs and defaults
//! - `builder`: fixed and dynamic vector reconstruction
//! - `vector`: the resulting ordered feature vector

pub mod builder;
pub mod profile;
pub mod record;
pub mod schema;
pub mod vector;

#[cfg(test)]
mod tests;

pub use builder::{build_dynamic, build_fixed, build_vector};
pub use profile::{CategoricalSpec, Coercion, FieldSpec, InputProfile};
pub use record::RawInputRecord;
pub use schema::FeatureSchema;
pub use vector::FeatureVector;
