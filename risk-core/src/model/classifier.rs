//! Probability Classifiers - class-1 probability from a scaled vector
//!
//! Treated as opaque numeric functions by the rest of the engine. Two
//! exported scikit-learn model families are supported: logistic regression
//! and random forest.

use std::sync::Arc;
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, InferenceError};

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Trait for binary classifiers (logistic regression, tree ensembles, ...)
pub trait ProbabilityClassifier: Send + Sync + std::fmt::Debug {
    /// Number of features the classifier was fitted on
    fn input_dim(&self) -> usize;

    /// Probability of the positive class, expected in [0, 1]
    fn predict_proba(&self, scaled: ArrayView1<'_, f64>) -> Result<f64, InferenceError>;

    fn kind(&self) -> &'static str;
}

fn check_dim(expected: usize, input: &ArrayView1<'_, f64>) -> Result<(), InferenceError> {
    if input.len() != expected {
        return Err(InferenceError::DimensionMismatch {
            stage: "classifier",
            expected,
            actual: input.len(),
        });
    }
    Ok(())
}

/// Numerically stable logistic function
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

// ============================================================================
// LOGISTIC REGRESSION
// ============================================================================

#[derive(Debug, Clone)]
pub struct LogisticRegression {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LogisticRegression {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self, ArtifactError> {
        if coefficients.is_empty() {
            return Err(ArtifactError::Invalid("logistic regression has no coefficients".to_string()));
        }
        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::Invalid("logistic regression has non-finite weights".to_string()));
        }
        Ok(Self {
            coefficients: Array1::from(coefficients),
            intercept,
        })
    }
}

impl ProbabilityClassifier for LogisticRegression {
    fn input_dim(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_proba(&self, scaled: ArrayView1<'_, f64>) -> Result<f64, InferenceError> {
        check_dim(self.input_dim(), &scaled)?;
        let z = self.coefficients.dot(&scaled) + self.intercept;
        Ok(sigmoid(z))
    }

    fn kind(&self) -> &'static str {
        "logistic_regression"
    }
}

// ============================================================================
// RANDOM FOREST
// ============================================================================

/// One node of an exported decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Go to `left` when `x[feature] <= threshold`, else `right`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Class-1 probability of the training samples reaching this leaf
    Leaf { value: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Children must point forward, so every walk terminates.
    fn validate(&self, n_features: usize) -> Result<(), ArtifactError> {
        if self.nodes.is_empty() {
            return Err(ArtifactError::Invalid("decision tree has no nodes".to_string()));
        }
        let n = self.nodes.len();
        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split { feature, threshold, left, right } => {
                    if feature >= n_features {
                        return Err(ArtifactError::Invalid(format!(
                            "node {} splits on feature {} of {}", i, feature, n_features
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(ArtifactError::Invalid(format!("node {} has a non-finite threshold", i)));
                    }
                    if left <= i || right <= i || left >= n || right >= n {
                        return Err(ArtifactError::Invalid(format!("node {} has invalid children", i)));
                    }
                }
                TreeNode::Leaf { value } => {
                    if !(0.0..=1.0).contains(&value) {
                        return Err(ArtifactError::Invalid(format!("leaf {} probability {} outside [0, 1]", i, value)));
                    }
                }
            }
        }
        Ok(())
    }

    fn leaf_value(&self, x: &ArrayView1<'_, f64>) -> f64 {
        let mut i = 0;
        loop {
            match self.nodes[i] {
                TreeNode::Leaf { value } => return value,
                TreeNode::Split { feature, threshold, left, right } => {
                    i = if x[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}

/// Mean of per-tree leaf probabilities, scikit-learn `RandomForestClassifier`
#[derive(Debug, Clone)]
pub struct RandomForest {
    n_features: usize,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn new(n_features: usize, trees: Vec<DecisionTree>) -> Result<Self, ArtifactError> {
        if n_features == 0 {
            return Err(ArtifactError::Invalid("random forest has zero features".to_string()));
        }
        if trees.is_empty() {
            return Err(ArtifactError::Invalid("random forest has no trees".to_string()));
        }
        for tree in &trees {
            tree.validate(n_features)?;
        }
        Ok(Self { n_features, trees })
    }
}

impl ProbabilityClassifier for RandomForest {
    fn input_dim(&self) -> usize {
        self.n_features
    }

    fn predict_proba(&self, scaled: ArrayView1<'_, f64>) -> Result<f64, InferenceError> {
        check_dim(self.n_features, &scaled)?;
        let sum: f64 = self.trees.iter().map(|t| t.leaf_value(&scaled)).sum();
        Ok(sum / self.trees.len() as f64)
    }

    fn kind(&self) -> &'static str {
        "random_forest"
    }
}

// ============================================================================
// SERIALIZED FORM
// ============================================================================

/// Classifier section of an artifact file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassifierSpec {
    LogisticRegression { coefficients: Vec<f64>, intercept: f64 },
    RandomForest { n_features: usize, trees: Vec<DecisionTree> },
}

impl ClassifierSpec {
    pub fn build(self) -> Result<Arc<dyn ProbabilityClassifier>, ArtifactError> {
        let classifier: Arc<dyn ProbabilityClassifier> = match self {
            ClassifierSpec::LogisticRegression { coefficients, intercept } => {
                Arc::new(LogisticRegression::new(coefficients, intercept)?)
            }
            ClassifierSpec::RandomForest { n_features, trees } => {
                Arc::new(RandomForest::new(n_features, trees)?)
            }
        };
        Ok(classifier)
    }
}
