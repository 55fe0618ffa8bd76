//! # Validation Rejections
//!
//! Maps the two ways a body can fail — malformed JSON and schema
//! violations — to structured HTTP responses. Violations respond
//! `422 Unprocessable Entity` with the failure map as the body, so API
//! clients receive every violated constraint grouped by property.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use modelguard_core::ValidationResult;

/// Rejection produced by [`ValidatedJson`](crate::ValidatedJson).
#[derive(Error, Debug)]
pub enum ValidationRejection {
    /// The body could not be deserialized at all.
    #[error("malformed body: {0}")]
    Json(#[from] axum::extract::rejection::JsonRejection),

    /// The body deserialized but violated the model's schema.
    #[error("validation failed with {} failure(s)", .0.failures().len())]
    Invalid(ValidationResult),
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        match self {
            ValidationRejection::Json(rejection) => rejection.into_response(),
            ValidationRejection::Invalid(result) => {
                let mut errors = serde_json::Map::new();
                for (property, messages) in result.failure_map() {
                    errors.insert(property, serde_json::json!(messages));
                }
                let body = serde_json::json!({ "errors": errors });
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}
