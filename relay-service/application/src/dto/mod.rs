mod transcribe_upload;

pub use transcribe_upload::TranscribeUploadResponse;
