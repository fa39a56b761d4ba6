use serde::Deserialize;

use crate::infrastructure::observability::MetricsConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Locations of the pre-trained artifacts loaded at startup
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// Fitted scaler shared by every model
    pub scaler_path: String,
    /// Selectable models, in display order
    pub models: Vec<ModelArtifactConfig>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ModelArtifactConfig {
    /// Display name shown in the model selector
    pub name: String,
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            scaler_path: "models/scaler.json".to_string(),
            models: vec![ModelArtifactConfig {
                name: "Logistic Regression".to_string(),
                path: "models/logreg_model.json".to_string(),
            }],
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.artifacts.scaler_path, "models/scaler.json");
        assert_eq!(config.artifacts.models.len(), 1);
        assert_eq!(config.artifacts.models[0].name, "Logistic Regression");
    }

    #[test]
    fn test_partial_config_uses_section_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [server]
                host = "127.0.0.1"
                port = 3000

                [logging]
                level = "debug"
                format = "json"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.artifacts.models[0].path, "models/logreg_model.json");
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_artifact_models_from_toml() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [artifacts]
                scaler_path = "/opt/artifacts/scaler.json"

                [[artifacts.models]]
                name = "Logistic Regression"
                path = "/opt/artifacts/logreg_model.json"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.artifacts.scaler_path, "/opt/artifacts/scaler.json");
        assert_eq!(
            config.artifacts.models,
            vec![ModelArtifactConfig {
                name: "Logistic Regression".to_string(),
                path: "/opt/artifacts/logreg_model.json".to_string(),
            }]
        );
    }
}
