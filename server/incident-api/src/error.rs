//! Mapping from core errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;

use incident_core::Error;

/// Newtype so core errors can flow out of handlers with `?`.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
  fn from(err: Error) -> Self {
    Self(err)
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self.0 {
      Error::Validation(errors) => {
        debug!("rejected: validation {errors}");
        (StatusCode::BAD_REQUEST, Json(errors)).into_response()
      }
      Error::BadUpdateShape(detail) => {
        debug!("rejected: bad update shape");
        (
          StatusCode::BAD_REQUEST,
          Json(serde_json::json!({ "detail": detail })),
        )
          .into_response()
      }
      Error::NotFound(id) => {
        debug!("rejected: incident {id} not found");
        (
          StatusCode::NOT_FOUND,
          Json(serde_json::json!({ "detail": "Not found." })),
        )
          .into_response()
      }
      Error::InvalidPage(detail) => {
        debug!("rejected: invalid page");
        (
          StatusCode::BAD_REQUEST,
          Json(serde_json::json!({ "detail": detail })),
        )
          .into_response()
      }
    }
  }
}
