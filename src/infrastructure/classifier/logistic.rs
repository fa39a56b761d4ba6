//! Binary logistic regression classifier

use serde::Deserialize;

use crate::domain::{Classifier, DomainError, ScaledSample, FEATURE_COUNT};

/// Fitted parameters of a binary logistic regression
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticRegressionParams {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Logistic regression over the standardized patient features
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl LogisticRegression {
    pub fn new(coefficients: &[f64], intercept: f64) -> Result<Self, DomainError> {
        let coefficients: [f64; FEATURE_COUNT] = coefficients
            .try_into()
            .map_err(|_| DomainError::feature_mismatch(FEATURE_COUNT, coefficients.len()))?;

        if coefficients.iter().any(|c| !c.is_finite()) || !intercept.is_finite() {
            return Err(DomainError::configuration(
                "Logistic regression parameters must be finite",
            ));
        }

        Ok(Self {
            coefficients,
            intercept,
        })
    }

    pub fn from_params(params: &LogisticRegressionParams) -> Result<Self, DomainError> {
        Self::new(&params.coefficients, params.intercept)
    }

    /// Signed distance to the decision boundary, `w·x + b`
    pub fn decision_function(&self, sample: &ScaledSample) -> f64 {
        self.coefficients
            .iter()
            .zip(sample.as_slice())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

fn sigmoid(z: f64) -> f64 {
    // Split on sign so exp never overflows
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Classifier for LogisticRegression {
    fn predict(&self, sample: &ScaledSample) -> Result<usize, DomainError> {
        let score = self.decision_function(sample);

        if !score.is_finite() {
            return Err(DomainError::prediction(format!(
                "Decision function is not finite: {}",
                score
            )));
        }

        Ok(usize::from(score > 0.0))
    }

    fn predict_proba(&self, sample: &ScaledSample) -> Result<[f64; 2], DomainError> {
        let score = self.decision_function(sample);

        if !score.is_finite() {
            return Err(DomainError::prediction(format!(
                "Decision function is not finite: {}",
                score
            )));
        }

        let positive = sigmoid(score);
        Ok([1.0 - positive, positive])
    }
}
