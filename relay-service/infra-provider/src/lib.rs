use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use relay_domain::{DomainError, ProviderOutcome, TranscriptionProvider};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ProviderClientConfig {
    pub endpoint: String,
    pub api_token: Option<String>,
    pub request_timeout: Duration,
}

/// Hugging Face hosted inference endpoint, called with the raw upload bytes.
pub struct HuggingFaceInferenceClient {
    client: Client,
    endpoint: String,
    api_token: String,
}

impl HuggingFaceInferenceClient {
    pub fn new(config: ProviderClientConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| {
                DomainError::internal_error(format!("failed to build http client: {err}"))
            })?;

        // A missing token is sent as an empty bearer and rejected upstream.
        Ok(Self {
            client,
            endpoint: config.endpoint,
            api_token: config.api_token.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl TranscriptionProvider for HuggingFaceInferenceClient {
    async fn transcribe(&self, payload: Bytes) -> Result<ProviderOutcome, DomainError> {
        let payload_bytes = payload.len();
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .body(payload)
            .send()
            .await
            .map_err(|err| DomainError::provider_unreachable(format!("request failed: {err}")))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| {
                DomainError::provider_unreachable(format!("reading body failed: {err}"))
            })?;

        tracing::debug!(
            status = status.as_u16(),
            payload_bytes,
            response_bytes = body.len(),
            "transcription provider responded"
        );

        decode_response(&body)
    }
}

#[derive(Debug, Deserialize)]
struct InferenceResponseBody {
    text: Option<String>,
    error: Option<Value>,
    estimated_time: Option<f64>,
}

/// Decodes the provider body regardless of HTTP status; an `error` key wins
/// over `text`.
fn decode_response(body: &[u8]) -> Result<ProviderOutcome, DomainError> {
    let decoded: InferenceResponseBody = serde_json::from_slice(body)
        .map_err(|err| DomainError::malformed_response(format!("invalid json body: {err}")))?;

    Ok(match decoded.error {
        Some(error) => ProviderOutcome::Failed {
            message: error_text(error),
            estimated_time: decoded.estimated_time,
        },
        None => ProviderOutcome::Transcribed { text: decoded.text },
    })
}

fn error_text(error: Value) -> String {
    match error {
        Value::String(message) => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_text_payload() {
        let outcome = decode_response(br#"{"text":"  hi  "}"#).expect("decodes");
        assert_eq!(
            outcome,
            ProviderOutcome::Transcribed {
                text: Some("  hi  ".to_string())
            }
        );
    }

    #[test]
    fn error_key_takes_precedence_over_text() {
        let outcome = decode_response(
            br#"{"text":"partial","error":"Model is currently loading","estimated_time":12.5}"#,
        )
        .expect("decodes");
        assert_eq!(
            outcome,
            ProviderOutcome::Failed {
                message: "Model is currently loading".to_string(),
                estimated_time: Some(12.5),
            }
        );
    }

    #[test]
    fn non_string_error_is_rendered_as_json() {
        let outcome = decode_response(br#"{"error":["quota","exceeded"]}"#).expect("decodes");
        assert_eq!(
            outcome,
            ProviderOutcome::Failed {
                message: r#"["quota","exceeded"]"#.to_string(),
                estimated_time: None,
            }
        );
    }

    #[test]
    fn empty_object_has_no_text() {
        let outcome = decode_response(b"{}").expect("decodes");
        assert_eq!(outcome, ProviderOutcome::Transcribed { text: None });
    }

    #[test]
    fn html_body_is_malformed() {
        let error = decode_response(b"<html>Bad Gateway</html>").expect_err("not json");
        assert!(matches!(error, DomainError::MalformedResponse(_)));
    }
}
