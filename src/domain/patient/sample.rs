//! Patient sample - the four raw vital-sign inputs for one prediction

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::controls::{AGE, CHOLESTEROL, DIASTOLIC_BP, SYSTOLIC_BP};
use crate::domain::DomainError;

/// Number of features the classifier pipeline consumes
pub const FEATURE_COUNT: usize = 4;

/// Raw patient vitals, in feature order: age, systolic BP, diastolic BP, cholesterol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PatientSample {
    #[validate(range(min = 0, max = 120, message = "Age must be between 0 and 120"))]
    pub age: u32,

    #[validate(range(
        min = 50,
        max = 250,
        message = "Systolic BP must be between 50 and 250 mmHg"
    ))]
    pub systolic_bp: u32,

    #[validate(range(
        min = 30,
        max = 150,
        message = "Diastolic BP must be between 30 and 150 mmHg"
    ))]
    pub diastolic_bp: u32,

    #[validate(range(
        min = 50,
        max = 400,
        message = "Cholesterol must be between 50 and 400 mg/dl"
    ))]
    pub cholesterol: u32,
}

impl Default for PatientSample {
    fn default() -> Self {
        Self {
            age: AGE.default,
            systolic_bp: SYSTOLIC_BP.default,
            diastolic_bp: DIASTOLIC_BP.default,
            cholesterol: CHOLESTEROL.default,
        }
    }
}

impl PatientSample {
    pub fn new(age: u32, systolic_bp: u32, diastolic_bp: u32, cholesterol: u32) -> Self {
        Self {
            age,
            systolic_bp,
            diastolic_bp,
            cholesterol,
        }
    }

    /// Check every field against its control range
    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate().map_err(|errors| {
            let mut messages: Vec<String> = errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errs)| {
                    errs.iter().map(move |e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{} is out of range", field))
                    })
                })
                .collect();
            messages.sort();

            DomainError::validation(messages.join("; "))
        })?;

        Ok(self)
    }

    /// Raw feature vector in classifier order
    pub fn to_features(&self) -> [f64; FEATURE_COUNT] {
        [
            f64::from(self.age),
            f64::from(self.systolic_bp),
            f64::from(self.diastolic_bp),
            f64::from(self.cholesterol),
        ]
    }
}
