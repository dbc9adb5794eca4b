use std::sync::Arc;
use std::time::Duration;

use anyhow::Error;
use relay_application::{RelayUseCase, RelayUseCaseImpl};
use relay_configuration::{AppConfig, ServerConfig};
use relay_domain::{AllowedExtensions, TranscriptionProvider};
use relay_http_server::{create_app_routes, serve, AppState};
use relay_infra_provider::{HuggingFaceInferenceClient, ProviderClientConfig};
use tokio::net::TcpListener;

pub async fn build_and_run(config: AppConfig, server_config: ServerConfig) -> Result<(), Error> {
    let app = Application::new(config)?;
    app.run(server_config).await
}

pub struct Application {
    pub state: AppState,
}

impl Application {
    pub fn new(config: AppConfig) -> Result<Self, Error> {
        let allowed_extensions = AllowedExtensions::new(&config.upload.allowed_extensions);
        tracing::info!(
            provider_endpoint = %config.provider.endpoint,
            request_timeout_secs = config.provider.request_timeout_secs,
            max_upload_bytes = config.server.max_upload_bytes,
            allowed_extensions = %allowed_extensions.display_list(),
            "initializing relay application"
        );
        if config.provider.api_token.is_none() {
            tracing::warn!(
                credential_env = %config.provider.credential_env,
                "provider credential is not set; transcription requests will be rejected upstream"
            );
        }

        let provider: Arc<dyn TranscriptionProvider> =
            Arc::new(HuggingFaceInferenceClient::new(ProviderClientConfig {
                endpoint: config.provider.endpoint.clone(),
                api_token: config.provider.api_token.clone(),
                request_timeout: Duration::from_secs(config.provider.request_timeout_secs),
            })?);
        let relay: Arc<dyn RelayUseCase> =
            Arc::new(RelayUseCaseImpl::new(provider, allowed_extensions));
        let state = AppState::new(relay, config.server.max_upload_bytes);

        Ok(Self { state })
    }

    pub async fn run(self, server_config: ServerConfig) -> Result<(), Error> {
        tracing::info!(
            host = %server_config.host,
            port = server_config.port,
            "starting relay HTTP routes"
        );

        create_app_routes(self.state, server_config)
            .await
            .map_err(|err| anyhow::anyhow!("server startup failed: {err}"))
    }

    /// Serves on an already-bound listener, e.g. an ephemeral test port.
    pub async fn serve(self, listener: TcpListener) -> Result<(), Error> {
        serve(listener, self.state).await
    }
}
