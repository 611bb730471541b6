//! Model Module - artifact loading and inference
//!
//! Scalers and classifiers sit behind traits so the storage format can
//! change without touching the feature or risk code.

pub mod artifact;
pub mod classifier;
pub mod inference;
pub mod registry;
pub mod scaler;


pub use artifact::{ArtifactBundle, ArtifactMetadata, ModelArtifact, DEFAULT_MODEL_SOURCE};
pub use classifier::{ClassifierSpec, DecisionTree, LogisticRegression, ProbabilityClassifier, RandomForest, TreeNode};
pub use inference::predict_probability;
pub use registry::{ModelRegistry, Prediction};
pub use scaler::{FeatureScaler, MinMaxScaler, ScalerSpec, StandardScaler};
