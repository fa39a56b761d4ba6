//! Artifact loading - scaler and classifier files read once at startup
//!
//! Any failure here is fatal: the service must not accept input without a
//! complete scaler and every configured model.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::ArtifactsConfig;
use crate::domain::{DomainError, ModelRegistry, StandardScaler};
use crate::infrastructure::classifier::{ClassifierArtifact, ClassifierFactory};

/// Serialized fitted scaler
#[derive(Debug, Clone, Deserialize)]
pub struct ScalerArtifact {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
}

impl ScalerArtifact {
    pub fn into_scaler(self) -> Result<StandardScaler, DomainError> {
        if let Some(names) = &self.feature_names {
            if names.len() != self.mean.len() {
                return Err(DomainError::feature_mismatch(self.mean.len(), names.len()));
            }
        }

        StandardScaler::new(&self.mean, &self.scale)
    }
}

/// Everything the prediction service needs, loaded and validated
#[derive(Debug, Clone)]
pub struct LoadedArtifacts {
    pub scaler: StandardScaler,
    pub registry: ModelRegistry,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
    let display = path.display().to_string();

    let contents =
        std::fs::read_to_string(path).map_err(|e| DomainError::artifact(&display, e.to_string()))?;

    serde_json::from_str(&contents)
        .map_err(|e| DomainError::artifact(&display, format!("Invalid artifact: {}", e)))
}

/// Load and validate the fitted scaler
pub fn load_scaler(path: impl AsRef<Path>) -> Result<StandardScaler, DomainError> {
    let path = path.as_ref();
    let artifact: ScalerArtifact = read_json(path)?;

    let scaler = artifact
        .into_scaler()
        .map_err(|e| DomainError::artifact(path.display().to_string(), e.to_string()))?;

    debug!(path = %path.display(), n_features = scaler.n_features(), "Loaded scaler");
    Ok(scaler)
}

/// Load every configured model into a registry, preserving config order
pub fn load_registry(config: &ArtifactsConfig) -> Result<ModelRegistry, DomainError> {
    if config.models.is_empty() {
        return Err(DomainError::configuration(
            "At least one model artifact must be configured",
        ));
    }

    let mut registry = ModelRegistry::new();

    for model in &config.models {
        let path = Path::new(&model.path);
        let artifact: ClassifierArtifact = read_json(path)?;

        let classifier = ClassifierFactory::create(&artifact)
            .map_err(|e| DomainError::artifact(&model.path, e.to_string()))?;

        registry.register(&model.name, classifier)?;

        info!(
            model = %model.name,
            kind = artifact.kind(),
            path = %model.path,
            "Registered model"
        );
    }

    Ok(registry)
}

/// Load the scaler and all models named in the configuration
pub fn load_artifacts(config: &ArtifactsConfig) -> Result<LoadedArtifacts, DomainError> {
    let scaler = load_scaler(&config.scaler_path)?;
    let registry = load_registry(config)?;

    Ok(LoadedArtifacts { scaler, registry })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelArtifactConfig;

    fn bundled(file: &str) -> String {
        format!("{}/models/{}", env!("CARGO_MANIFEST_DIR"), file)
    }

    fn bundled_config() -> ArtifactsConfig {
        ArtifactsConfig {
            scaler_path: bundled("scaler.json"),
            models: vec![ModelArtifactConfig {
                name: "Logistic Regression".to_string(),
                path: bundled("logreg_model.json"),
            }],
        }
    }

    #[test]
    fn test_load_bundled_artifacts() {
        let loaded = load_artifacts(&bundled_config()).unwrap();

        assert_eq!(loaded.scaler.n_features(), 4);
        assert_eq!(loaded.registry.names(), vec!["Logistic Regression"]);
    }

    #[test]
    fn test_missing_scaler_is_fatal() {
        let config = ArtifactsConfig {
            scaler_path: "does/not/exist/scaler.json".to_string(),
            ..bundled_config()
        };

        let err = load_artifacts(&config).unwrap_err();
        match err {
            DomainError::Artifact { path, .. } => assert_eq!(path, "does/not/exist/scaler.json"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_model_is_fatal() {
        let config = ArtifactsConfig {
            models: vec![ModelArtifactConfig {
                name: "Logistic Regression".to_string(),
                path: "does/not/exist/logreg_model.json".to_string(),
            }],
            ..bundled_config()
        };

        let err = load_registry(&config).unwrap_err();
        assert!(err.to_string().contains("does/not/exist/logreg_model.json"));
    }

    #[test]
    fn test_no_models_configured() {
        let config = ArtifactsConfig {
            models: Vec::new(),
            ..bundled_config()
        };

        let err = load_registry(&config).unwrap_err();
        assert!(matches!(err, DomainError::Configuration { .. }));
    }

    #[test]
    fn test_duplicate_model_names() {
        let mut config = bundled_config();
        config.models.push(config.models[0].clone());

        let err = load_registry(&config).unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn test_scaler_artifact_wrong_width() {
        let artifact: ScalerArtifact =
            serde_json::from_str(r#"{"mean": [1, 2, 3, 4, 5], "scale": [1, 1, 1, 1, 1]}"#).unwrap();

        let err = artifact.into_scaler().unwrap_err();
        assert!(matches!(
            err,
            DomainError::FeatureMismatch {
                expected: 4,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_scaler_artifact_feature_names_must_match() {
        let artifact: ScalerArtifact = serde_json::from_str(
            r#"{"mean": [1, 2, 3, 4], "scale": [1, 1, 1, 1], "feature_names": ["age"]}"#,
        )
        .unwrap();

        assert!(artifact.into_scaler().is_err());
    }
}
