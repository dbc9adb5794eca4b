use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_application::ApplicationError;
use relay_domain::{DomainError, UploadRejection};
use serde_json::json;

pub const GATEWAY_TIMEOUT_MESSAGE: &str =
    "Could not reach the transcription service. Please try again later.";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";
pub const MALFORMED_MULTIPART_MESSAGE: &str = "Malformed multipart request.";

#[derive(Debug)]
pub enum HttpError {
    BadRequest { message: String },
    PayloadTooLarge { limit_bytes: usize },
    ServiceUnavailable { message: String },
    ProviderError { message: String },
    GatewayTimeout,
    Internal,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            HttpError::PayloadTooLarge { limit_bytes } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                format!(
                    "Uploaded file exceeds the maximum allowed size of {limit_bytes} bytes."
                ),
            ),
            HttpError::ServiceUnavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            HttpError::ProviderError { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
            HttpError::GatewayTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                GATEWAY_TIMEOUT_MESSAGE.to_string(),
            ),
            HttpError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        };

        (
            status,
            Json(json!({
                "error": message,
            })),
        )
            .into_response()
    }
}

impl From<UploadRejection> for HttpError {
    fn from(rejection: UploadRejection) -> Self {
        error_mapper(ApplicationError::Validation(rejection))
    }
}

/// Classifies an application failure. Transport and internal details are
/// logged here and never reach the response body.
pub fn error_mapper(error: ApplicationError) -> HttpError {
    match error {
        ApplicationError::Validation(rejection) => {
            tracing::info!(reason = %rejection, "upload rejected");
            HttpError::BadRequest {
                message: rejection.to_string(),
            }
        }
        ApplicationError::ProviderWarmingUp { .. } => HttpError::ServiceUnavailable {
            message: error.to_string(),
        },
        ApplicationError::ProviderFailure(_) => HttpError::ProviderError {
            message: error.to_string(),
        },
        ApplicationError::Domain(DomainError::ProviderUnreachable(detail)) => {
            tracing::error!(error = %detail, "transcription provider unreachable");
            HttpError::GatewayTimeout
        }
        ApplicationError::Domain(other) => {
            tracing::error!(error = %other, "transcribe request failed");
            HttpError::Internal
        }
    }
}

pub fn multipart_error_mapper(error: MultipartError, limit_bytes: usize) -> HttpError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::info!(limit_bytes, "upload exceeds body limit");
        return HttpError::PayloadTooLarge { limit_bytes };
    }

    tracing::info!(error = %error.body_text(), "malformed multipart upload");
    HttpError::BadRequest {
        message: MALFORMED_MULTIPART_MESSAGE.to_string(),
    }
}
