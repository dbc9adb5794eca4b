use std::fmt;

use bytes::Bytes;

use crate::UploadRejection;

pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 8] =
    ["mp3", "wav", "m4a", "flac", "mp4", "mov", "avi", "mkv"];

/// Fallback transcript used when the provider answers without a `text` field.
pub const MISSING_TRANSCRIPT_TEXT: &str = "No transcript available.";

/// Lower-cased container extensions accepted for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedExtensions(Vec<String>);

impl AllowedExtensions {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.0
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn display_list(&self) -> String {
        self.0.join(", ")
    }
}

impl Default for AllowedExtensions {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_EXTENSIONS)
    }
}

/// An upload filename that passed validation against an allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName(String);

impl FileName {
    /// Validates the client-supplied filename.
    ///
    /// `None` means the multipart request carried no file part at all.
    pub fn parse(raw: Option<&str>, allowed: &AllowedExtensions) -> Result<Self, UploadRejection> {
        let raw = raw.ok_or(UploadRejection::MissingFilePart)?;
        if raw.is_empty() {
            return Err(UploadRejection::NoFileSelected);
        }

        match file_extension(raw) {
            Some(extension) if allowed.contains(extension) => Ok(Self(raw.to_string())),
            _ => Err(UploadRejection::UnsupportedFileType {
                allowed: allowed.display_list(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text after the final `.`, or `None` when the name has no dot.
pub fn file_extension(file_name: &str) -> Option<&str> {
    file_name.rsplit_once('.').map(|(_, extension)| extension)
}

#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: FileName,
    pub payload: Bytes,
}

impl Upload {
    pub fn new(file_name: FileName, payload: Bytes) -> Self {
        Self { file_name, payload }
    }
}

/// Provider response decoded into its two possible shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome {
    Transcribed {
        text: Option<String>,
    },
    Failed {
        message: String,
        estimated_time: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub file_name: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<FileName, UploadRejection> {
        FileName::parse(Some(raw), &AllowedExtensions::default())
    }

    #[test]
    fn accepts_every_default_extension_case_insensitively() {
        for ext in DEFAULT_ALLOWED_EXTENSIONS {
            assert!(parse(&format!("clip.{ext}")).is_ok(), "{ext} should pass");
            assert!(
                parse(&format!("clip.{}", ext.to_ascii_uppercase())).is_ok(),
                "{ext} upper-case should pass"
            );
        }
    }

    #[test]
    fn uses_text_after_final_dot() {
        assert_eq!(parse("meeting.notes.mp3").unwrap().as_str(), "meeting.notes.mp3");
        assert!(matches!(
            parse("song.mp3.exe"),
            Err(UploadRejection::UnsupportedFileType { .. })
        ));
    }

    #[test]
    fn rejects_names_without_extension() {
        assert!(matches!(
            parse("recording"),
            Err(UploadRejection::UnsupportedFileType { .. })
        ));
        assert!(matches!(
            parse("recording."),
            Err(UploadRejection::UnsupportedFileType { .. })
        ));
    }

    #[test]
    fn distinguishes_missing_part_from_empty_name() {
        let allowed = AllowedExtensions::default();
        assert_eq!(
            FileName::parse(None, &allowed),
            Err(UploadRejection::MissingFilePart)
        );
        assert_eq!(
            FileName::parse(Some(""), &allowed),
            Err(UploadRejection::NoFileSelected)
        );
    }

    #[test]
    fn allow_list_normalizes_entries() {
        let allowed = AllowedExtensions::new([".OGG", "", "webm"]);
        assert_eq!(allowed.as_slice(), &["ogg".to_string(), "webm".to_string()]);
        assert!(allowed.contains("Ogg"));
        assert!(!allowed.contains("mp3"));
    }
}
