//! Contains all endpoint-associated functions, along with the router that wires them up.
//!
//! Both endpoints are public; the service performs no authentication.

use axum::{
    Json,
    Router,
    body::Body,
    extract::rejection::JsonRejection,
    http::{Response, StatusCode, header::CONTENT_TYPE},
    routing::{get, post},
};

use crate::{
    LIVENESS_JSON,
    model::{student_metrics::StudentMetrics, validation_error::ValidationError},
    scoring,
};

/// Builds the service router. The CORS layer is applied by the caller.
pub fn router() -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/predict_success", post(predict_success))
}

/// Confirms the service process is running and responsive
///
/// Frontends poll this route to show the service as online or offline
pub async fn read_root() -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "application/json")
        .body(LIVENESS_JSON.into())
        .unwrap()
}

/// Computes a risk assessment from the submitted student metrics
///
/// Accepts the extractor result directly so a malformed payload can be surfaced
/// as a structured validation error instead of the framework's plain-text default
pub async fn predict_success(
    payload: Result<Json<StudentMetrics>, JsonRejection>,
) -> Response<Body> {
    let Json(metrics) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::warn!("rejected prediction payload: {rejection}");
            let error = ValidationError::from(&rejection);
            let error_json = serde_json::to_string(&error).unwrap();
            return Response::builder()
                .status(rejection.status())
                .header(CONTENT_TYPE, "application/json")
                .body(error_json.into())
                .unwrap();
        }
    };

    let assessment = scoring::predict(&metrics);
    let assessment_json = serde_json::to_string(&assessment).unwrap();

    return Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "application/json")
        .body(assessment_json.into())
        .unwrap();
}
