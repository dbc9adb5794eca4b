use async_trait::async_trait;
use bytes::Bytes;

use crate::{DomainError, ProviderOutcome};

/// Outbound port to the remote transcription inference endpoint.
///
/// Implementations issue exactly one request per call and never retry. A
/// provider-reported failure is a successful call that yields
/// [`ProviderOutcome::Failed`]; only faults reaching or decoding the provider
/// come back as [`DomainError`].
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    async fn transcribe(&self, payload: Bytes) -> Result<ProviderOutcome, DomainError>;
}
