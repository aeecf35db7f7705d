use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::error::TodoError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

/// The one place a per-request failure becomes a status code. Backend
/// errors are logged here and answered with a generic message.
impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            TodoError::BodyRequired | TodoError::InvalidId => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            TodoError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            TodoError::Backend(err) => {
                tracing::error!(error = %err, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
