use relay_domain::{DomainError, UploadRejection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    Validation(#[from] UploadRejection),

    #[error("AI model is starting up. Please try again in {retry_after_secs} seconds.")]
    ProviderWarmingUp { retry_after_secs: u64 },

    #[error("AI Service Error: {0}")]
    ProviderFailure(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
