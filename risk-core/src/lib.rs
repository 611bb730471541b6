//! Silent Disease Risk - Feature Alignment & Risk Classification Engine
//!
//! Turns loosely-structured client input into the exact feature vector a
//! previously fitted model expects, runs it through the stored scaler and
//! classifier, and maps the probability onto a Low/Moderate/High verdict.
//!
//! # Pipeline
//!
//! ```text
//! request ──► features::build_vector ──► model::predict_probability ──► risk::classify_probability
//!               (schema-aware)             (scaler + classifier)          (threshold verdict)
//!
//! manual scores ──► risk::calculate_weighted_risk + risk::generate_explanation
//! ```
//!
//! ## Modules
//! - `features`: Feature Schema, Raw Input Record, per-disease input profiles, vector builder
//! - `model`: scaler/classifier traits, artifact loading, the immutable `ModelRegistry`
//! - `risk`: both risk threshold schemes, explanation rules, overall aggregation
//! - `error`: typed error taxonomy shared by all of the above

pub mod disease;
pub mod error;
pub mod features;
pub mod model;
pub mod risk;

pub use disease::Disease;
pub use error::{ArtifactError, InferenceError, RiskError, RiskResult, SchemaError};
pub use features::{FeatureSchema, FeatureVector, RawInputRecord};
pub use model::{ModelArtifact, ModelRegistry, Prediction};
pub use risk::{RiskLevel, RiskVerdict};
