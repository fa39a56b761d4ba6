//! Pre-fitted per-feature standardization

use serde::{Deserialize, Serialize};

use crate::domain::patient::{PatientSample, FEATURE_COUNT};
use crate::domain::DomainError;

/// A patient sample after standardization
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledSample([f64; FEATURE_COUNT]);

impl ScaledSample {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        self.0
    }
}

/// Standard scaler with mean and scale fitted outside this system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    /// Build a scaler from fitted parameters.
    ///
    /// Fails when either vector does not have exactly [`FEATURE_COUNT`] entries
    /// or when a scale entry is zero or not finite.
    pub fn new(mean: &[f64], scale: &[f64]) -> Result<Self, DomainError> {
        let mean: [f64; FEATURE_COUNT] = mean
            .try_into()
            .map_err(|_| DomainError::feature_mismatch(FEATURE_COUNT, mean.len()))?;
        let scale: [f64; FEATURE_COUNT] = scale
            .try_into()
            .map_err(|_| DomainError::feature_mismatch(FEATURE_COUNT, scale.len()))?;

        if let Some(m) = mean.iter().find(|m| !m.is_finite()) {
            return Err(DomainError::configuration(format!(
                "Scaler mean must be finite, got {}",
                m
            )));
        }

        if let Some(s) = scale.iter().find(|s| !s.is_finite() || **s == 0.0) {
            return Err(DomainError::configuration(format!(
                "Scaler scale must be finite and non-zero, got {}",
                s
            )));
        }

        Ok(Self { mean, scale })
    }

    pub fn mean(&self) -> &[f64; FEATURE_COUNT] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64; FEATURE_COUNT] {
        &self.scale
    }

    pub fn n_features(&self) -> usize {
        FEATURE_COUNT
    }

    /// `scaled[i] = (raw[i] - mean[i]) / scale[i]`
    pub fn transform(&self, sample: &PatientSample) -> ScaledSample {
        let raw = sample.to_features();
        let mut scaled = [0.0; FEATURE_COUNT];

        for (i, value) in scaled.iter_mut().enumerate() {
            *value = (raw[i] - self.mean[i]) / self.scale[i];
        }

        ScaledSample(scaled)
    }
}
