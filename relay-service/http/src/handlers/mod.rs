mod relay;

pub use relay::{health_check, transcribe_upload, LIVENESS_MESSAGE};
