//! Classifier capability set and the predictor that drives it

use super::result::{PredictionLabel, PredictionResult};
use super::scaler::ScaledSample;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// A pre-trained binary classifier.
///
/// Any concrete model (logistic regression today) only needs to expose a
/// decision and the per-class probabilities for a scaled sample.
#[cfg_attr(test, automock)]
pub trait Classifier: Send + Sync {
    /// Predicted class index (0 or 1)
    fn predict(&self, sample: &ScaledSample) -> Result<usize, DomainError>;

    /// Class probabilities `[p(class 0), p(class 1)]`
    fn predict_proba(&self, sample: &ScaledSample) -> Result<[f64; 2], DomainError>;
}

/// Run one prediction and derive the confidence of the predicted class
pub fn predict(
    model_name: &str,
    classifier: &dyn Classifier,
    sample: &ScaledSample,
) -> Result<PredictionResult, DomainError> {
    let class = classifier.predict(sample)?;
    let label = PredictionLabel::from_class(class)?;
    let probabilities = classifier.predict_proba(sample)?;

    if let Some(p) = probabilities
        .iter()
        .find(|p| !p.is_finite() || !(0.0..=1.0).contains(*p))
    {
        return Err(DomainError::prediction(format!(
            "Classifier '{}' returned invalid probability {}",
            model_name, p
        )));
    }

    let confidence = probabilities[class];

    if confidence < 0.5 {
        return Err(DomainError::prediction(format!(
            "Classifier '{}' predicted class {} with probability {:.4}, below the 0.5 decision threshold",
            model_name, class, confidence
        )));
    }

    Ok(PredictionResult::new(model_name, label, confidence))
}
