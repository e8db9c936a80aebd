//! Incident Report API
//!
//! HTTP boundary over incident-core. Routes follow the original REST
//! contract: `/incidents/` for list/create, `/incidents/{id}/` for
//! partial update and delete, plus an unpaginated feed for the HTML page.

mod error;
mod handlers;
mod state;
mod types;

use axum::routing::{get, patch};
use axum::Router;
use std::sync::Arc;

pub use state::AppState;
pub use types::{ListQuery, ListResponse};

/// Build the application router. Kept separate from `main` so tests can
/// drive the service in-process.
pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(handlers::health))
    .route(
      "/incidents/",
      get(handlers::list_incidents).post(handlers::create_incident),
    )
    .route("/incidents/all/", get(handlers::list_all))
    .route(
      "/incidents/:id/",
      patch(handlers::update_incident).delete(handlers::delete_incident),
    )
    .with_state(state)
}
