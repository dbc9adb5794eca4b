use relay_configuration::AppConfig;
use relay_setup::Application;
use tokio::net::TcpListener;
use wiremock::MockServer;

pub const MODEL_PATH: &str = "/models/openai/whisper-large-v3";
pub const TEST_TOKEN: &str = "hf_integration_token";

pub fn test_config(provider_endpoint: String) -> AppConfig {
    let mut config = AppConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.provider.endpoint = provider_endpoint;
    config.provider.request_timeout_secs = 5;
    config.provider.api_token = Some(TEST_TOKEN.to_string());
    config
}

/// Starts the relay on an ephemeral port and returns its base URL.
pub async fn setup_test_server(
    config: AppConfig,
) -> Result<(String, reqwest::Client), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind((config.server.host.as_str(), 0)).await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let app = Application::new(config)?;
    tokio::spawn(async move {
        let _ = app.serve(listener).await;
    });
    Ok((base_url, reqwest::Client::new()))
}

pub async fn setup_with_provider(
) -> Result<(MockServer, String, reqwest::Client), Box<dyn std::error::Error>> {
    let provider = MockServer::start().await;
    let config = test_config(format!("{}{MODEL_PATH}", provider.uri()));
    let (base_url, client) = setup_test_server(config).await?;
    Ok((provider, base_url, client))
}

pub fn upload_form(file_name: &str, bytes: &'static [u8]) -> reqwest::multipart::Form {
    reqwest::multipart::Form::new().part(
        "file",
        reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string()),
    )
}
