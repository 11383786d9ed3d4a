/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, plus conversions from axum extractor
 * rejections so malformed bodies and query strings surface as validation
 * errors instead of axum's plain-text defaults.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "success": false,
 *   "message": "Title is required",
 *   "field": "title"
 * }
 * ```
 *
 * `field` is only present for validation and conflict errors. 5xx responses
 * always carry the generic message; the underlying cause is logged.
 */

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::backend::error::types::BackendError;
use crate::shared::SharedError;

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            success: false,
            message: self.message(),
            field: self.field().map(str::to_string),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                "Request body must be JSON (Content-Type: application/json)".to_string()
            }
            JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON".to_string(),
            JsonRejection::JsonDataError(err) => err.body_text(),
            other => other.body_text(),
        };
        Self::Validation(SharedError::validation("body", message))
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(SharedError::validation("query", rejection.body_text()))
    }
}
