use std::sync::Arc;

use creditrisk_predictor::VertexPredictor;

#[tokio::main]
async fn main() {
    creditrisk_api::telemetry::init();

    let config = creditrisk_api::config::AppConfig::from_env();
    tracing::info!(
        endpoint = %config.vertex.endpoint_name(),
        "configured prediction endpoint"
    );

    let predictor = Arc::new(
        VertexPredictor::new(config.vertex.clone()).expect("failed to build prediction client"),
    );

    let app = creditrisk_api::app::build_app(&config, predictor);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {e}", config.bind_addr));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
