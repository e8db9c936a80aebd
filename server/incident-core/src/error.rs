//! Structured error types for the incident workflow.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  /// Malformed input: missing/blank required fields, illegal status value
  /// or transition. Carries field-keyed messages.
  #[error("validation failed: {0}")]
  Validation(FieldErrors),

  /// Update payload has the wrong key set.
  #[error("{0}")]
  BadUpdateShape(String),

  /// No record with the given id.
  #[error("incident {0} not found")]
  NotFound(i64),

  /// Malformed pagination parameter.
  #[error("invalid page: {0}")]
  InvalidPage(String),
}

impl Error {
  /// Single-field validation error shortcut.
  pub fn validation(field: &str, message: impl Into<String>) -> Self {
    let mut errors = FieldErrors::new();
    errors.push(field, message);
    Self::Validation(errors)
  }
}

/// Field-keyed validation messages, serialized as a JSON object of
/// `field -> [messages]`. Ordered so output is deterministic.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, field: &str, message: impl Into<String>) {
    self.0.entry(field.to_string()).or_default().push(message.into());
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn contains(&self, field: &str) -> bool {
    self.0.contains_key(field)
  }
}

impl std::fmt::Display for FieldErrors {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let mut first = true;
    for (field, messages) in &self.0 {
      if !first {
        f.write_str("; ")?;
      }
      first = false;
      write!(f, "{}: {}", field, messages.join(" "))?;
    }
    Ok(())
  }
}
