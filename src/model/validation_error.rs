use axum::extract::rejection::JsonRejection;
use serde::Serialize;

/// Body returned when a request payload fails schema validation. The detail
/// string carries the extractor's own description, which names the offending
/// field.
#[derive(Debug, Serialize)]
pub struct ValidationError {
    pub error: &'static str,
    pub detail: String,
}

impl From<&JsonRejection> for ValidationError {
    fn from(rejection: &JsonRejection) -> Self {
        ValidationError {
            error: "validation_error",
            detail: rejection.body_text(),
        }
    }
}
