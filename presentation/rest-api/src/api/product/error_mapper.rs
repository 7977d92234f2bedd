use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = if self.is_validation() {
            (StatusCode::BAD_REQUEST, "ValidationError")
        } else if self.is_not_found() {
            (StatusCode::NOT_FOUND, "NotFound")
        } else {
            tracing::error!("product request failed: {self:?}");
            (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
