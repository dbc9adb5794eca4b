use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::Json,
};

use relay_application::TranscribeUploadResponse;
use relay_domain::{Upload, UploadRejection};

use crate::error::{error_mapper, multipart_error_mapper, HttpError};
use crate::AppState;

pub const LIVENESS_MESSAGE: &str = "Relay server is running!";
const FILE_FIELD: &str = "file";

pub async fn health_check() -> &'static str {
    LIVENESS_MESSAGE
}

pub async fn transcribe_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<TranscribeUploadResponse>), HttpError> {
    // A body that is not multipart at all carries no file part either.
    let Ok(mut multipart) = multipart else {
        return Err(UploadRejection::MissingFilePart.into());
    };

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| multipart_error_mapper(err, state.max_upload_bytes))?
    {
        // Text fields named `file` are not file parts.
        if field.name() != Some(FILE_FIELD) || field.file_name().is_none() {
            continue;
        }

        let file_name = state
            .relay
            .validate_upload(field.file_name())
            .map_err(error_mapper)?;
        let payload = field
            .bytes()
            .await
            .map_err(|err| multipart_error_mapper(err, state.max_upload_bytes))?;
        upload = Some(Upload::new(file_name, payload));
        break;
    }
    let upload = upload.ok_or(UploadRejection::MissingFilePart)?;

    tracing::info!(
        file_name = %upload.file_name,
        payload_bytes = upload.payload.len(),
        "received transcribe request"
    );

    match state.relay.transcribe(upload).await {
        Ok(result) => {
            tracing::info!(
                file_name = %result.file_name,
                transcript_chars = result.transcript.chars().count(),
                "transcribe request completed"
            );
            Ok((StatusCode::OK, Json(result)))
        }
        Err(error) => Err(error_mapper(error)),
    }
}
