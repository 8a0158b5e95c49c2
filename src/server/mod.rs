pub mod handlers;
pub mod types;

use crate::{
    Result, bedrock::BedrockConnector, config::Config, invoker::Invoker,
    secrets::SecretsManagerStore,
};
use axum::{Router, routing::post};
use self::handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handlers::converse))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // The secret store uses the ambient provider chain; Bedrock sessions are
    // opened per request from the resolved secret.
    let secrets = SecretsManagerStore::from_env(&config.aws).await;
    let connector = BedrockConnector::new(&config.aws);
    let invoker = Invoker::new(&config.aws, Arc::new(secrets), Arc::new(connector));

    let app = router(AppState {
        invoker: Arc::new(invoker),
    });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
