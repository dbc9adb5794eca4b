use serde::Serialize;

use relay_domain::Transcript;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeUploadResponse {
    pub success: bool,
    pub file_name: String,
    pub transcript: String,
}

impl From<Transcript> for TranscribeUploadResponse {
    fn from(transcript: Transcript) -> Self {
        Self {
            success: true,
            file_name: transcript.file_name,
            transcript: transcript.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_client_field_names() {
        let response = TranscribeUploadResponse::from(Transcript {
            file_name: "memo.wav".to_string(),
            text: "hello".to_string(),
        });

        let value = serde_json::to_value(&response).expect("response serializes");
        assert_eq!(
            value,
            serde_json::json!({
                "success": true,
                "fileName": "memo.wav",
                "transcript": "hello"
            })
        );
    }
}
