//! Bounded input controls presented by the patient form

/// A single numeric slider on the patient form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureControl {
    /// Form field name
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
    pub default: u32,
    pub step: u32,
    pub help: Option<&'static str>,
}

impl FeatureControl {
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const AGE: FeatureControl = FeatureControl {
    key: "age",
    label: "Age",
    min: 0,
    max: 120,
    default: 45,
    step: 1,
    help: Some("Select the patient's age"),
};

pub const SYSTOLIC_BP: FeatureControl = FeatureControl {
    key: "systolic_bp",
    label: "Systolic BP (mmHg)",
    min: 50,
    max: 250,
    default: 120,
    step: 1,
    help: None,
};

pub const DIASTOLIC_BP: FeatureControl = FeatureControl {
    key: "diastolic_bp",
    label: "Diastolic BP (mmHg)",
    min: 30,
    max: 150,
    default: 80,
    step: 1,
    help: None,
};

pub const CHOLESTEROL: FeatureControl = FeatureControl {
    key: "cholesterol",
    label: "Cholesterol (mg/dl)",
    min: 50,
    max: 400,
    default: 180,
    step: 1,
    help: None,
};

/// Controls in feature order (the order the scaler and classifier expect)
pub const FEATURE_CONTROLS: [FeatureControl; 4] = [AGE, SYSTOLIC_BP, DIASTOLIC_BP, CHOLESTEROL];
