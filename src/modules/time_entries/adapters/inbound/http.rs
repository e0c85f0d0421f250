// Shared HTTP mapping for the time entry use cases.
//
// - ApplicationError -> status code + {"error", "message"} body.
// - Extractor rejections -> 400 validation_error in the same body shape.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::time_entries::use_cases::application_error::ApplicationError;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
        ApplicationError::NotFound { .. } => StatusCode::NOT_FOUND,
        ApplicationError::ConflictingActiveSession { .. }
        | ApplicationError::ConcurrentModification { .. } => StatusCode::CONFLICT,
        ApplicationError::InvalidTransition(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: self.code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn json_rejection(rejection: JsonRejection) -> Response {
    ApplicationError::Validation(rejection.body_text()).into_response()
}

pub fn query_rejection(rejection: QueryRejection) -> Response {
    ApplicationError::Validation(rejection.body_text()).into_response()
}
