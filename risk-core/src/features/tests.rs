//! Cross-module tests for vector reconstruction
//!
//! Covers defaulting, one-hot overlay, and the alignment invariants the
//! scaler relies on.

use serde_json::json;

use super::builder::{build_vector, build_dynamic};
use super::profile::{self, InputProfile};
use super::record::RawInputRecord;
use super::schema::FeatureSchema;

fn fixed_schema(profile: &InputProfile) -> FeatureSchema {
    FeatureSchema::new(profile.fixed_columns().unwrap()).unwrap()
}

/// Columns as produced by a drop-first one-hot encoding of the heart data
fn heart_schema() -> FeatureSchema {
    FeatureSchema::new([
        "age", "sex", "trestbps", "chol", "fbs", "thalach", "exang", "oldpeak", "ca",
        "cp_1", "cp_2", "cp_3",
        "restecg_1", "restecg_2",
        "slope_1", "slope_2",
        "thal_1", "thal_2", "thal_3",
    ])
    .unwrap()
}

fn record(value: serde_json::Value) -> RawInputRecord {
    RawInputRecord::from_value(value).unwrap()
}

// ============================================================================
// FIXED SCHEMA
// ============================================================================

#[test]
fn test_diabetes_vector_in_schema_order() {
    let schema = fixed_schema(&profile::DIABETES);
    let input = record(json!({
        "Glucose": 174,
        "BloodPressure": 72,
        "SkinThickness": 20,
        "Insulin": 80,
        "BMI": 30,
        "Age": 45
    }));

    let vector = build_vector(&profile::DIABETES, &schema, &input);

    assert_eq!(vector.len(), 8);
    assert_eq!(vector.as_slice(), &[0.0, 174.0, 72.0, 20.0, 80.0, 30.0, 0.5, 45.0]);
    assert!(vector.matches(&schema));
}

#[test]
fn test_omitted_fields_equal_explicit_defaults() {
    for profile in [&profile::DIABETES, &profile::LIVER, &profile::MENTAL_HEALTH] {
        let schema = fixed_schema(profile);
        let InputProfile::Fixed { fields } = profile else { unreachable!() };

        let explicit: RawInputRecord = fields
            .iter()
            .map(|f| (f.source, json!(f.default)))
            .collect();
        let empty = RawInputRecord::new();

        assert_eq!(
            build_vector(profile, &schema, &explicit),
            build_vector(profile, &schema, &empty),
        );
    }
}

#[test]
fn test_partial_omission_uses_defaults() {
    let schema = fixed_schema(&profile::DIABETES);
    let partial = record(json!({"Glucose": 140, "Age": 50}));
    let explicit = record(json!({
        "Pregnancies": 0, "Glucose": 140, "BloodPressure": 0, "SkinThickness": 0,
        "Insulin": 0, "BMI": 0, "DiabetesPedigreeFunction": 0.5, "Age": 50
    }));

    assert_eq!(
        build_vector(&profile::DIABETES, &schema, &partial),
        build_vector(&profile::DIABETES, &schema, &explicit),
    );
}

#[test]
fn test_malformed_values_fall_back_to_defaults() {
    let schema = fixed_schema(&profile::DIABETES);
    let input = record(json!({
        "Glucose": "high",
        "BMI": "31.5",
        "DiabetesPedigreeFunction": null,
        "Age": [40]
    }));

    let vector = build_vector(&profile::DIABETES, &schema, &input);

    assert_eq!(vector.get_by_name(&schema, "Glucose"), Some(0.0));
    assert_eq!(vector.get_by_name(&schema, "BMI"), Some(31.5));
    assert_eq!(vector.get_by_name(&schema, "DiabetesPedigreeFunction"), Some(0.5));
    assert_eq!(vector.get_by_name(&schema, "Age"), Some(0.0));
}

#[test]
fn test_liver_gender_label_encoded() {
    let schema = fixed_schema(&profile::LIVER);
    let input = record(json!({"Age": 52, "Gender": "Male", "Albumin": 3.1}));

    let vector = build_vector(&profile::LIVER, &schema, &input);

    assert_eq!(vector.len(), 10);
    assert_eq!(vector.get(0), Some(52.0));
    assert_eq!(vector.get(1), Some(1.0));
    assert_eq!(vector.get_by_name(&schema, "Albumin"), Some(3.1));
    assert_eq!(vector.get_by_name(&schema, "Total_Protiens"), Some(7.0));
}

#[test]
fn test_mental_health_scaled_indicators() {
    let schema = fixed_schema(&profile::MENTAL_HEALTH);
    let input = record(json!({"stress_level": 9, "workload": "6", "sleep_quality": 2}));

    let vector = build_vector(&profile::MENTAL_HEALTH, &schema, &input);

    assert_eq!(vector.as_slice(), &[0.9, 0.6, 0.2]);
}

// ============================================================================
// DYNAMIC SCHEMA
// ============================================================================

#[test]
fn test_heart_defaults_only() {
    let schema = heart_schema();
    let vector = build_vector(&profile::HEART, &schema, &RawInputRecord::new());

    assert_eq!(vector.len(), schema.len());
    assert_eq!(vector.get_by_name(&schema, "trestbps"), Some(120.0));
    assert_eq!(vector.get_by_name(&schema, "chol"), Some(200.0));
    assert_eq!(vector.get_by_name(&schema, "thalach"), Some(150.0));
    // cp=0 and restecg=0 are the dropped baselines
    for col in ["cp_1", "cp_2", "cp_3", "restecg_1", "restecg_2"] {
        assert_eq!(vector.get_by_name(&schema, col), Some(0.0), "{col}");
    }
    // slope=1 and thal=2 have dummies
    assert_eq!(vector.get_by_name(&schema, "slope_1"), Some(1.0));
    assert_eq!(vector.get_by_name(&schema, "thal_2"), Some(1.0));
}

#[test]
fn test_heart_sets_exactly_one_dummy_per_known_category() {
    let schema = heart_schema();
    let input = record(json!({
        "age": 61, "sex": 1, "cp": "2", "slope": 2, "thal": "3", "restecg": "1"
    }));

    let vector = build_vector(&profile::HEART, &schema, &input);

    let hot: Vec<&str> = schema
        .columns()
        .iter()
        .enumerate()
        .filter(|(i, name)| name.contains('_') && vector.get(*i) == Some(1.0))
        .map(|(_, name)| name.as_str())
        .collect();
    assert_eq!(hot, vec!["cp_2", "restecg_1", "slope_2", "thal_3"]);
    assert_eq!(vector.get_by_name(&schema, "age"), Some(61.0));
    assert_eq!(vector.get_by_name(&schema, "sex"), Some(1.0));
}

#[test]
fn test_unknown_category_equals_omitted() {
    let schema = heart_schema();
    let base = json!({"age": 50, "sex": 0, "chol": 240});

    let mut with_unknown = base.clone();
    with_unknown["cp"] = json!("9");
    let omitted = record(base);
    let unknown = record(with_unknown);

    let a = build_vector(&profile::HEART, &schema, &unknown);
    let b = build_vector(&profile::HEART, &schema, &omitted);

    assert_eq!(a, b);
    for col in ["cp_1", "cp_2", "cp_3"] {
        assert_eq!(a.get_by_name(&schema, col), Some(0.0));
    }
}

/// slope and thal default to a non-baseline code, so an omitted field sets
/// that code's dummy while an unseen code leaves every dummy at zero.
#[test]
fn test_unknown_slope_thal_differ_from_omitted() {
    let schema = heart_schema();
    let omitted = build_vector(&profile::HEART, &schema, &RawInputRecord::new());
    let unknown = build_vector(
        &profile::HEART,
        &schema,
        &record(json!({"slope": "7", "thal": "9"})),
    );

    assert_ne!(unknown, omitted);

    assert_eq!(omitted.get_by_name(&schema, "slope_1"), Some(1.0));
    assert_eq!(omitted.get_by_name(&schema, "thal_2"), Some(1.0));
    for col in ["slope_1", "slope_2", "thal_1", "thal_2", "thal_3"] {
        assert_eq!(unknown.get_by_name(&schema, col), Some(0.0), "{col}");
    }
}

#[test]
fn test_unknown_restecg_equals_omitted() {
    let schema = heart_schema();
    let unknown = record(json!({"restecg": "left ventricular hypertrophy"}));
    let omitted = RawInputRecord::new();

    assert_eq!(
        build_vector(&profile::HEART, &schema, &unknown),
        build_vector(&profile::HEART, &schema, &omitted),
    );
}

#[test]
fn test_unknown_fields_dropped_silently() {
    let schema = heart_schema();
    let noisy = record(json!({"age": 44, "favourite_colour": "blue", "cp_1": 1}));
    let clean = record(json!({"age": 44}));

    let a = build_vector(&profile::HEART, &schema, &noisy);
    let b = build_vector(&profile::HEART, &schema, &clean);

    assert_eq!(a, b);
    assert_eq!(a.len(), schema.len());
}

#[test]
fn test_numeric_field_absent_from_schema_is_skipped() {
    // Schema trained without "ca" and without any thal dummies
    let schema = FeatureSchema::new(["age", "chol", "cp_1", "slope_1"]).unwrap();
    let input = record(json!({"age": 70, "ca": 3, "thal": "2", "cp": 1}));

    let InputProfile::Dynamic { numeric, categorical } = profile::HEART else { unreachable!() };
    let vector = build_dynamic(numeric, categorical, &schema, &input);

    assert_eq!(vector.as_slice(), &[70.0, 200.0, 1.0, 1.0]);
}

#[test]
fn test_numeric_category_codes_render_like_strings() {
    let schema = heart_schema();
    let as_number = record(json!({"cp": 3, "thal": 1}));
    let as_string = record(json!({"cp": "3", "thal": "1"}));

    assert_eq!(
        build_vector(&profile::HEART, &schema, &as_number),
        build_vector(&profile::HEART, &schema, &as_string),
    );
}
