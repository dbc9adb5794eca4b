use anyhow::Result;
use relay_configuration::{load_config, setup_logging};
use relay_setup::build_and_run;

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    setup_logging(&config);
    let server_config = config.server.clone();

    if let Err(err) = build_and_run(config, server_config).await {
        tracing::error!(error = %err, "relay service stopped");
        return Err(err);
    }
    Ok(())
}
