use std::sync::Arc;

use async_trait::async_trait;

use relay_domain::{
    AllowedExtensions, FileName, ProviderOutcome, Transcript, TranscriptionProvider, Upload,
    MISSING_TRANSCRIPT_TEXT,
};

use crate::{ApplicationError, TranscribeUploadResponse};

/// Substring the provider puts in its error text while the model is loading.
pub const WARM_UP_MARKER: &str = "is currently loading";
pub const DEFAULT_WARM_UP_WAIT_SECS: f64 = 20.0;

#[async_trait]
pub trait RelayUseCase: Send + Sync {
    /// Checks the client filename before any payload bytes are read.
    fn validate_upload(&self, file_name: Option<&str>) -> Result<FileName, ApplicationError>;

    async fn transcribe(&self, upload: Upload)
        -> Result<TranscribeUploadResponse, ApplicationError>;
}

pub struct RelayUseCaseImpl {
    provider: Arc<dyn TranscriptionProvider>,
    allowed_extensions: AllowedExtensions,
}

impl RelayUseCaseImpl {
    pub fn new(
        provider: Arc<dyn TranscriptionProvider>,
        allowed_extensions: AllowedExtensions,
    ) -> Self {
        Self {
            provider,
            allowed_extensions,
        }
    }
}

#[async_trait]
impl RelayUseCase for RelayUseCaseImpl {
    fn validate_upload(&self, file_name: Option<&str>) -> Result<FileName, ApplicationError> {
        FileName::parse(file_name, &self.allowed_extensions).map_err(|rejection| {
            tracing::debug!(
                file_name = file_name.unwrap_or("<none>"),
                reason = %rejection,
                "upload rejected"
            );
            ApplicationError::from(rejection)
        })
    }

    async fn transcribe(
        &self,
        upload: Upload,
    ) -> Result<TranscribeUploadResponse, ApplicationError> {
        let Upload { file_name, payload } = upload;
        tracing::debug!(
            file_name = %file_name,
            payload_bytes = payload.len(),
            "forwarding upload to transcription provider"
        );

        let outcome = self.provider.transcribe(payload).await?;
        let transcript = interpret_outcome(outcome, file_name)?;

        tracing::debug!(
            transcript_chars = transcript.text.chars().count(),
            "transcription relay completed"
        );

        Ok(TranscribeUploadResponse::from(transcript))
    }
}

fn interpret_outcome(
    outcome: ProviderOutcome,
    file_name: FileName,
) -> Result<Transcript, ApplicationError> {
    match outcome {
        ProviderOutcome::Failed {
            message,
            estimated_time,
        } if message.contains(WARM_UP_MARKER) => {
            let retry_after_secs = estimated_time.unwrap_or(DEFAULT_WARM_UP_WAIT_SECS) as u64;
            tracing::warn!(retry_after_secs, "transcription model is still loading");
            Err(ApplicationError::ProviderWarmingUp { retry_after_secs })
        }
        ProviderOutcome::Failed { message, .. } => {
            tracing::warn!(provider_error = %message, "transcription provider reported an error");
            Err(ApplicationError::ProviderFailure(message))
        }
        ProviderOutcome::Transcribed { text } => Ok(Transcript {
            file_name: file_name.into_inner(),
            text: text
                .as_deref()
                .unwrap_or(MISSING_TRANSCRIPT_TEXT)
                .trim()
                .to_string(),
        }),
    }
}
