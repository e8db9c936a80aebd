//! HTTP handlers for the incident API.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::info;

use incident_core::{CreateIncident, IncidentReport, PageParams};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{ListQuery, ListResponse};

pub async fn health() -> &'static str {
  "ok"
}

pub async fn list_incidents(
  State(state): State<Arc<AppState>>,
  Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>, ApiError> {
  let params = PageParams::from_raw(query.page.as_deref(), query.page_size.as_deref())?;
  let page = state.service.list_incidents(query.status.as_deref(), params);
  Ok(Json(ListResponse::from_page(page, &query)))
}

pub async fn create_incident(
  State(state): State<Arc<AppState>>,
  Json(payload): Json<CreateIncident>,
) -> Result<(StatusCode, Json<IncidentReport>), ApiError> {
  let record = state.service.create_incident(payload)?;
  info!(id = record.id, status = %record.status, "incident created");
  Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_incident(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
  Json(payload): Json<Map<String, Value>>,
) -> Result<Json<IncidentReport>, ApiError> {
  let record = state.service.update_status(id, &payload)?;
  info!(id = record.id, status = %record.status, "incident status updated");
  Ok(Json(record))
}

pub async fn delete_incident(
  State(state): State<Arc<AppState>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
  state.service.delete_incident(id)?;
  info!(id, "incident deleted");
  Ok(StatusCode::NO_CONTENT)
}

/// Unpaginated, unfiltered feed for the HTML listing page.
pub async fn list_all(State(state): State<Arc<AppState>>) -> Json<Vec<IncidentReport>> {
  Json(state.service.list_all())
}
