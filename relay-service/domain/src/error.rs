use thiserror::Error;

/// Reasons an upload is refused before anything is sent to the provider.
///
/// The `Display` text is returned to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("No file part found in the request.")]
    MissingFilePart,

    #[error("No file selected for upload.")]
    NoFileSelected,

    #[error("Invalid file type. Allowed types: {allowed}")]
    UnsupportedFileType { allowed: String },
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("transcription provider unreachable: {0}")]
    ProviderUnreachable(String),

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn provider_unreachable(detail: impl Into<String>) -> Self {
        Self::ProviderUnreachable(detail.into())
    }

    pub fn malformed_response(detail: impl Into<String>) -> Self {
        Self::MalformedResponse(detail.into())
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }
}
