use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Artifact error: {path} - {message}")]
    Artifact { path: String, message: String },

    #[error("Feature mismatch: expected {expected} features, got {actual}")]
    FeatureMismatch { expected: usize, actual: usize },

    #[error("Prediction error: {message}")]
    Prediction { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn artifact(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Artifact {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn feature_mismatch(expected: usize, actual: usize) -> Self {
        Self::FeatureMismatch { expected, actual }
    }

    pub fn prediction(message: impl Into<String>) -> Self {
        Self::Prediction {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Model 'Random Forest' is not registered");
        assert_eq!(
            error.to_string(),
            "Not found: Model 'Random Forest' is not registered"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("age must be between 0 and 120");
        assert_eq!(
            error.to_string(),
            "Validation error: age must be between 0 and 120"
        );
    }

    #[test]
    fn test_artifact_error() {
        let error = DomainError::artifact("models/scaler.json", "No such file or directory");
        assert_eq!(
            error.to_string(),
            "Artifact error: models/scaler.json - No such file or directory"
        );
    }

    #[test]
    fn test_feature_mismatch_error() {
        let error = DomainError::feature_mismatch(4, 9);
        assert_eq!(
            error.to_string(),
            "Feature mismatch: expected 4 features, got 9"
        );
    }
}
