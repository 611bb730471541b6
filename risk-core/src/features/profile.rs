//! Input Profiles - how request fields map onto model columns
//!
//! One profile per disease. A `Fixed` profile *is* the schema: its field
//! list names every column in training order. A `Dynamic` profile only
//! knows the fields a caller may send; the column list comes from the
//! artifact, because one-hot dummy names depend on the training data.

use crate::features::record::RawInputRecord;

// ============================================================================
// FIELD SPECS
// ============================================================================

/// How a raw field value becomes a column value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coercion {
    /// Plain floating point
    Float,
    /// Boolean-like integer; fractional input is truncated toward zero
    Integer,
    /// Divide by a constant (e.g. a 0-10 slider onto a 0-1 indicator)
    Ratio(f64),
    /// Label-encoded class names; position in the list is the code.
    /// Numeric input is taken as the code itself.
    Label(&'static [&'static str]),
}

/// One numeric column with its request field and default
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Column name in the feature schema
    pub column: &'static str,
    /// Request field it is read from
    pub source: &'static str,
    /// Value used when the field is absent or malformed, in request units
    pub default: f64,
    pub coercion: Coercion,
}

impl FieldSpec {
    pub const fn float(name: &'static str, default: f64) -> Self {
        Self { column: name, source: name, default, coercion: Coercion::Float }
    }

    pub const fn integer(name: &'static str, default: f64) -> Self {
        Self { column: name, source: name, default, coercion: Coercion::Integer }
    }

    /// Resolve this column's value from a record. Never fails.
    pub fn resolve(&self, record: &RawInputRecord) -> f64 {
        let raw = match self.coercion {
            Coercion::Label(classes) => label_code(record, self.source, classes),
            _ => record.number(self.source),
        }
        .unwrap_or(self.default);

        match self.coercion {
            Coercion::Float | Coercion::Label(_) => raw,
            Coercion::Integer => raw.trunc(),
            Coercion::Ratio(divisor) => raw / divisor,
        }
    }
}

fn label_code(record: &RawInputRecord, field: &str, classes: &[&str]) -> Option<f64> {
    if let Some(code) = record.number(field) {
        return Some(code);
    }
    let value = record.category(field)?;
    classes
        .iter()
        .position(|class| class.eq_ignore_ascii_case(&value))
        .map(|i| i as f64)
}

/// A categorical field reconstructed as `"{field}_{value}"` dummies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoricalSpec {
    pub field: &'static str,
    /// Code used when the field is absent
    pub default: &'static str,
}

impl CategoricalSpec {
    pub fn resolve(&self, record: &RawInputRecord) -> String {
        record
            .category(self.field)
            .unwrap_or_else(|| self.default.to_string())
    }
}

// ============================================================================
// INPUT PROFILE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputProfile {
    /// Hand-enumerated numeric columns; field order is the schema
    Fixed { fields: &'static [FieldSpec] },
    /// Column list supplied by the artifact; fields overlay onto it
    Dynamic {
        numeric: &'static [FieldSpec],
        categorical: &'static [CategoricalSpec],
    },
}

impl InputProfile {
    /// Column names of a fixed profile, in order
    pub fn fixed_columns(&self) -> Option<Vec<&'static str>> {
        match self {
            InputProfile::Fixed { fields } => Some(fields.iter().map(|f| f.column).collect()),
            InputProfile::Dynamic { .. } => None,
        }
    }
}

// ============================================================================
// DISEASE PROFILES
// ============================================================================

/// Pima diabetes model: 8 numeric columns in training order
pub static DIABETES: InputProfile = InputProfile::Fixed {
    fields: &[
        FieldSpec::float("Pregnancies", 0.0),
        FieldSpec::float("Glucose", 0.0),
        FieldSpec::float("BloodPressure", 0.0),
        FieldSpec::float("SkinThickness", 0.0),
        FieldSpec::float("Insulin", 0.0),
        FieldSpec::float("BMI", 0.0),
        FieldSpec::float("DiabetesPedigreeFunction", 0.5), // population average
        FieldSpec::float("Age", 0.0),
    ],
};

/// UCI heart model: numeric overlay plus drop-first one-hot categoricals
pub static HEART: InputProfile = InputProfile::Dynamic {
    numeric: &[
        FieldSpec::float("age", 0.0),
        FieldSpec::integer("sex", 0.0), // 1 = male, 0 = female
        FieldSpec::float("trestbps", 120.0),
        FieldSpec::float("chol", 200.0),
        FieldSpec::integer("fbs", 0.0), // fasting blood sugar > 120
        FieldSpec::float("thalach", 150.0),
        FieldSpec::integer("exang", 0.0),
        FieldSpec::float("oldpeak", 0.0),
        FieldSpec::float("ca", 0.0),
    ],
    categorical: &[
        CategoricalSpec { field: "cp", default: "0" },
        CategoricalSpec { field: "slope", default: "1" },
        CategoricalSpec { field: "thal", default: "2" },
        CategoricalSpec { field: "restecg", default: "0" },
    ],
};

/// Indian liver patient model, columns in CSV order
pub static LIVER: InputProfile = InputProfile::Fixed {
    fields: &[
        FieldSpec::float("Age", 30.0),
        FieldSpec {
            column: "Gender",
            source: "Gender",
            default: 0.0,
            coercion: Coercion::Label(&["Female", "Male"]),
        },
        FieldSpec::float("Total_Bilirubin", 0.8),
        FieldSpec::float("Direct_Bilirubin", 0.2),
        FieldSpec::float("Alkaline_Phosphotase", 100.0),
        FieldSpec::float("Alamine_Aminotransferase", 30.0),
        FieldSpec::float("Aspartate_Aminotransferase", 25.0),
        FieldSpec::float("Total_Protiens", 7.0),
        FieldSpec::float("Albumin", 4.0),
        FieldSpec::float("Albumin_and_Globulin_Ratio", 1.0),
    ],
};

/// Stress/burnout model: 0-10 self-reports scaled onto 0-1 indicators
pub static MENTAL_HEALTH: InputProfile = InputProfile::Fixed {
    fields: &[
        FieldSpec {
            column: "Anxiety_Indicator",
            source: "stress_level",
            default: 5.0,
            coercion: Coercion::Ratio(10.0),
        },
        FieldSpec {
            column: "Workload_Indicator",
            source: "workload",
            default: 5.0,
            coercion: Coercion::Ratio(10.0),
        },
        FieldSpec {
            column: "Sleep_Indicator",
            source: "sleep_quality",
            default: 7.0,
            coercion: Coercion::Ratio(10.0),
        },
    ],
};
