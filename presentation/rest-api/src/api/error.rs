use std::any::Any;

use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::payload::Json;
use tracing::error;

use business::domain::analysis::errors::{AnalysisError, ErrorKind};

use crate::api::analysis::dto::AnalysisResponse;

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<AnalysisResponse>);
}

/// Renders the failure envelope outside of an OpenAPI operation.
fn envelope_response(status: StatusCode, body: AnalysisResponse) -> Response {
    poem::web::Json(body).with_status(status).into_response()
}

fn internal_response(err: AnalysisError) -> Response {
    let (status, json) = err.into_error_response();
    envelope_response(status, json.0)
}

/// Last-resort mapping for errors raised by the framework around a handler,
/// e.g. a body that is not valid JSON.
pub async fn handle_api_error(err: poem::Error) -> Response {
    let status = err.status();

    if status.is_server_error() {
        error!(%status, "Unhandled API error: {}", err);
        return internal_response(AnalysisError::Internal(err.to_string()));
    }

    match status {
        StatusCode::BAD_REQUEST
        | StatusCode::UNSUPPORTED_MEDIA_TYPE
        | StatusCode::UNPROCESSABLE_ENTITY
        | StatusCode::PAYLOAD_TOO_LARGE => envelope_response(
            status,
            AnalysisResponse::failure(ErrorKind::Validation, err.to_string()),
        ),
        _ => err.into_response(),
    }
}

/// Panic hook for `CatchPanic`: logs the payload and answers with the failure envelope.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let reason = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    error!("Request handler panicked: {}", reason);

    internal_response(AnalysisError::Internal(
        "unexpected fault while handling the request".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_turn_server_errors_into_internal_envelope() {
        let err = poem::Error::from_string("pool closed", StatusCode::INTERNAL_SERVER_ERROR);

        let resp = handle_api_error(err).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = resp.into_body().into_string().await.unwrap();
        assert!(body.contains("\"success\":false"));
        assert!(body.contains("\"error_kind\":\"internal_error\""));
    }

    #[tokio::test]
    async fn should_keep_not_found_untouched() {
        let err = poem::Error::from_status(StatusCode::NOT_FOUND);

        let resp = handle_api_error(err).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_answer_panics_with_internal_envelope() {
        let resp = panic_response(Box::new("index out of bounds"));

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = resp.into_body().into_string().await.unwrap();
        assert!(body.contains("\"error_kind\":\"internal_error\""));
    }
}
