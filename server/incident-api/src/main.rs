//! Binary entrypoint for the incident API.

use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use incident_api::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "5005".into())
    .parse()
    .map_err(|_| "PORT must be a valid u16")?;

  let state = Arc::new(AppState::new());

  if std::env::var("SEED_DEMO_DATA").map_or(false, |v| v == "1") {
    let n = incident_core::seed::seed_demo_incidents(&state.service)?;
    info!(count = n, "seeded demo incidents");
  }

  let app = incident_api::router(state).layer(CorsLayer::permissive());

  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  info!("incident-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
