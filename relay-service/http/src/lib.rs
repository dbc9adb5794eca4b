use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use relay_configuration::ServerConfig;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod error;
pub mod handlers;
pub mod state;

pub use error::{error_mapper, HttpError};
pub use handlers::*;
pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Uploads are buffered whole before forwarding; cap them per route.
    let transcribe_route =
        post(transcribe_upload).layer(DefaultBodyLimit::max(state.max_upload_bytes));

    Router::new()
        .route("/", get(health_check))
        .route("/transcribe", transcribe_route)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn create_app_routes(state: AppState, config: ServerConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    serve(listener, state).await
}

pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "relay http server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
