//! Infrastructure layer - Artifact loading, classifiers and observability

pub mod artifacts;
pub mod classifier;
pub mod logging;
pub mod observability;
pub mod services;
