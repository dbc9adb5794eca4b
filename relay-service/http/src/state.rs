use std::sync::Arc;

use relay_application::RelayUseCase;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<dyn RelayUseCase>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(relay: Arc<dyn RelayUseCase>, max_upload_bytes: usize) -> Self {
        Self {
            relay,
            max_upload_bytes,
        }
    }
}
