//! Browser-facing form, result page and CSV download

mod page;
mod styles;

pub use page::{escape_html, render_page, render_result_card, PageView};

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Form, Query, State,
    },
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{debug, warn};

use super::state::AppState;
use super::types::ApiError;
use crate::domain::{PatientSample, CSV_CONTENT_TYPE, CSV_FILENAME};
use crate::infrastructure::services::Prediction;

/// Submitted form values; a missing slider keeps its default
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientForm {
    pub model: Option<String>,
    pub age: Option<u32>,
    pub systolic_bp: Option<u32>,
    pub diastolic_bp: Option<u32>,
    pub cholesterol: Option<u32>,
}

impl PatientForm {
    pub fn sample(&self) -> PatientSample {
        let defaults = PatientSample::default();

        PatientSample::new(
            self.age.unwrap_or(defaults.age),
            self.systolic_bp.unwrap_or(defaults.systolic_bp),
            self.diastolic_bp.unwrap_or(defaults.diastolic_bp),
            self.cholesterol.unwrap_or(defaults.cholesterol),
        )
    }
}

fn page_response(
    state: &AppState,
    status: StatusCode,
    form: &PatientForm,
    prediction: Option<&Prediction>,
    error: Option<&str>,
) -> Response {
    let service = &state.prediction_service;
    let view = PageView {
        models: service.model_names(),
        selected_model: form
            .model
            .as_deref()
            .unwrap_or_else(|| service.default_model_name()),
        sample: prediction.map(|p| p.sample).unwrap_or_else(|| form.sample()),
        prediction,
        error,
    };

    (status, Html(render_page(&view))).into_response()
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Response {
    page_response(&state, StatusCode::OK, &PatientForm::default(), None, None)
}

/// POST /predict
pub async fn submit(
    State(state): State<AppState>,
    form: Result<Form<PatientForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected prediction form");
            let message = format!("Invalid form submission: {}", rejection.body_text());
            return page_response(
                &state,
                StatusCode::BAD_REQUEST,
                &PatientForm::default(),
                None,
                Some(&message),
            );
        }
    };

    match state
        .prediction_service
        .predict(form.model.as_deref(), form.sample())
    {
        Ok(prediction) => page_response(&state, StatusCode::OK, &form, Some(&prediction), None),
        Err(err) => {
            let error = ApiError::from(err);
            page_response(&state, error.status, &form, None, Some(error.message()))
        }
    }
}

/// GET /predict/csv - single-row CSV export of a prediction
pub async fn export_csv(
    State(state): State<AppState>,
    query: Result<Query<PatientForm>, QueryRejection>,
) -> Response {
    let form = match query {
        Ok(Query(form)) => form,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected CSV export query");
            return (
                StatusCode::BAD_REQUEST,
                format!("Invalid export request: {}", rejection.body_text()),
            )
                .into_response();
        }
    };

    let csv = state
        .prediction_service
        .predict(form.model.as_deref(), form.sample())
        .and_then(|prediction| prediction.record().to_csv());

    match csv {
        Ok(csv) => {
            debug!(bytes = csv.len(), "Exporting prediction CSV");
            csv_response(csv)
        }
        Err(err) => {
            let error = ApiError::from(err);
            (error.status, error.message().to_string()).into_response()
        }
    }
}

fn csv_response(csv: String) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", CSV_FILENAME);

    match HeaderValue::from_str(&disposition) {
        Ok(disposition) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(CSV_CONTENT_TYPE)),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            csv,
        )
            .into_response(),
        Err(e) => ApiError::internal(format!("Invalid download header: {}", e)).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use super::PatientForm;
    use crate::api::router::create_router;
    use crate::api::test_support::{bundled_state, fixed_state};
    use crate::domain::PatientSample;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn form_post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/predict")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_form_defaults() {
        assert_eq!(PatientForm::default().sample(), PatientSample::default());

        let form = PatientForm {
            age: Some(70),
            ..PatientForm::default()
        };
        assert_eq!(form.sample(), PatientSample::new(70, 120, 80, 180));
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let (status, headers, body) = send(create_router(fixed_state(0, [0.8, 0.2])), get("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert!(body.contains("🩺 Diabetic Retinopathy Prediction"));
        assert!(body.contains("🔮 Predict"));
    }

    #[tokio::test]
    async fn test_submit_low_risk() {
        let app = create_router(fixed_state(0, [0.8, 0.2]));
        let (status, _, body) = send(
            app,
            form_post("model=Logistic+Regression&age=45&systolic_bp=120&diastolic_bp=80&cholesterol=180"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"class="result-card result-card-low-risk""#));
        assert!(body.contains("✅ Low Risk: No Retinopathy"));
        assert!(body.contains("Confidence: 80.00%"));
        assert!(body.contains("📥 Download Result as CSV"));
    }

    #[tokio::test]
    async fn test_submit_high_risk() {
        let app = create_router(fixed_state(1, [0.07, 0.93]));
        let (status, _, body) = send(
            app,
            form_post("age=45&systolic_bp=120&diastolic_bp=80&cholesterol=180"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"class="result-card result-card-high-risk""#));
        assert!(body.contains("⚠️ High Risk: Retinopathy"));
        assert!(body.contains("Confidence: 93.00%"));
    }

    #[tokio::test]
    async fn test_submit_keeps_submitted_values() {
        let app = create_router(bundled_state());
        let (_, _, body) = send(
            app,
            form_post("age=80&systolic_bp=190&diastolic_bp=110&cholesterol=320"),
        )
        .await;

        assert!(body.contains(r#"name="age" min="0" max="120" step="1" value="80""#));
        assert!(body.contains("⚠️ High Risk: Retinopathy"));
    }

    #[tokio::test]
    async fn test_submit_out_of_range() {
        let app = create_router(fixed_state(0, [0.8, 0.2]));
        let (status, _, body) = send(
            app,
            form_post("age=45&systolic_bp=120&diastolic_bp=80&cholesterol=999"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Cholesterol must be between 50 and 400 mg/dl"));
        assert!(!body.contains("Prediction Result"));
    }

    #[tokio::test]
    async fn test_submit_non_numeric() {
        let app = create_router(fixed_state(0, [0.8, 0.2]));
        let (status, _, body) = send(app, form_post("age=old")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Invalid form submission"));
    }

    #[tokio::test]
    async fn test_submit_unknown_model() {
        let app = create_router(fixed_state(0, [0.8, 0.2]));
        let (status, _, body) = send(app, form_post("model=Random+Forest&age=45")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Model &#x27;Random Forest&#x27; is not registered"));
    }

    #[tokio::test]
    async fn test_export_csv() {
        let app = create_router(fixed_state(0, [0.8, 0.2]));
        let (status, headers, body) = send(
            app,
            get("/predict/csv?model=Logistic%20Regression&age=45&systolic_bp=120&diastolic_bp=80&cholesterol=180"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "text/csv");
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"retinopathy_prediction.csv\""
        );
        assert_eq!(
            body,
            "Model Used,Age,Systolic BP,Diastolic BP,Cholesterol,Prediction,Confidence (%)\n\
             Logistic Regression,45,120,80,180,No Retinopathy,80.00\n"
        );
    }

    #[tokio::test]
    async fn test_export_csv_rejects_out_of_range() {
        let app = create_router(fixed_state(0, [0.8, 0.2]));
        let (status, _, body) = send(app, get("/predict/csv?age=200")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Age must be between 0 and 120"));
    }
}
