//! JSON prediction endpoints

use axum::extract::State;
use tracing::debug;

use super::state::AppState;
use super::types::{ApiError, Json, ModelInfo, ModelsResponse, PredictRequest, PredictResponse};

/// GET /api/models
pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    let service = &state.prediction_service;
    let default = service.default_model_name();

    let data = service
        .model_names()
        .into_iter()
        .map(|name| ModelInfo {
            name: name.to_string(),
            default: name == default,
        })
        .collect();

    Json(ModelsResponse::new(data))
}

/// POST /api/predict
pub async fn create_prediction(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    debug!(model = ?request.model, "Prediction requested");

    let prediction = state
        .prediction_service
        .predict(request.model.as_deref(), request.sample())?;

    Ok(Json(PredictResponse::from(&prediction)))
}
