//! Model registry - display name to classifier, fixed at startup

use std::sync::Arc;

use super::classifier::Classifier;
use crate::domain::DomainError;

/// A classifier registered under its display name
#[derive(Clone)]
pub struct RegisteredModel {
    pub name: String,
    pub classifier: Arc<dyn Classifier>,
}

impl std::fmt::Debug for RegisteredModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredModel")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered, read-only set of selectable models
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: Vec<RegisteredModel>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a classifier; names must be unique and non-empty
    pub fn register(
        &mut self,
        name: impl Into<String>,
        classifier: Arc<dyn Classifier>,
    ) -> Result<(), DomainError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::configuration("Model name cannot be empty"));
        }

        if self.contains(&name) {
            return Err(DomainError::configuration(format!(
                "Model '{}' is already registered",
                name
            )));
        }

        self.models.push(RegisteredModel { name, classifier });
        Ok(())
    }

    pub fn with_model(
        mut self,
        name: impl Into<String>,
        classifier: Arc<dyn Classifier>,
    ) -> Result<Self, DomainError> {
        self.register(name, classifier)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredModel> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Look up a model or fail with `NotFound`
    pub fn require(&self, name: &str) -> Result<&RegisteredModel, DomainError> {
        self.get(name)
            .ok_or_else(|| DomainError::not_found(format!("Model '{}' is not registered", name)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The model selected when the caller does not choose one
    pub fn default_model(&self) -> Option<&RegisteredModel> {
        self.models.first()
    }

    pub fn names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
