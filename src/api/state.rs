//! Application state shared by request handlers

use std::sync::Arc;

use crate::infrastructure::services::PredictionService;

/// Application state; everything in it is read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub prediction_service: Arc<PredictionService>,
}

impl AppState {
    pub fn new(prediction_service: PredictionService) -> Self {
        Self {
            prediction_service: Arc::new(prediction_service),
        }
    }
}
