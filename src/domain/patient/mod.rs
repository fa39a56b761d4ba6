//! Patient domain - form controls and raw vital-sign samples

mod controls;
mod sample;

pub use controls::{
    FeatureControl, AGE, CHOLESTEROL, DIASTOLIC_BP, FEATURE_CONTROLS, SYSTOLIC_BP,
};
pub use sample::{PatientSample, FEATURE_COUNT};
