use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::analysis::errors::{AnalysisError, ErrorKind};

use crate::api::analysis::dto::AnalysisResponse;
use crate::api::error::IntoErrorResponse;

impl IntoErrorResponse for AnalysisError {
    fn into_error_response(self) -> (StatusCode, Json<AnalysisResponse>) {
        let kind = self.kind();
        // Handled failures are still a successful exchange with the caller.
        let status = match kind {
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::OK,
        };

        (
            status,
            Json(AnalysisResponse::failure(kind, self.to_string())),
        )
    }
}
