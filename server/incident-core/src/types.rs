//! Core types for the incident workflow (JSON contracts + internal models).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Status enum
// ---------------------------------------------------------------------------

/// Workflow state of an incident report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
  /// Incident has been recorded.
  Open,
  /// Responders are assigned and active.
  InProgress,
  /// Incident has been handled. Terminal.
  Resolved,
}

impl Status {
  pub const ALL: [Status; 3] = [Status::Open, Status::InProgress, Status::Resolved];

  /// Strict parse: exact wire names only, no aliases.
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "open" => Some(Self::Open),
      "in_progress" => Some(Self::InProgress),
      "resolved" => Some(Self::Resolved),
      _ => None,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Open => "open",
      Self::InProgress => "in_progress",
      Self::Resolved => "resolved",
    }
  }
}

impl std::fmt::Display for Status {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Incident record
// ---------------------------------------------------------------------------

/// A persisted incident report. `id` and `created_at` are store-assigned
/// and immutable; `title` and `location` are written exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentReport {
  pub id: i64,
  pub title: String,
  pub location: String,
  pub status: Status,
  pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// Raw creation payload. Every field is optional at the serde level so
/// validation can report all missing/blank fields at once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateIncident {
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub location: Option<String>,
  #[serde(default)]
  pub status: Option<String>,
}

/// Validated creation data, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIncident {
  pub title: String,
  pub location: String,
  pub status: Status,
}

/// Explicit ordering argument for store listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
  /// Descending `created_at`, ties broken by descending id.
  NewestFirst,
  /// Ascending `created_at`, ties broken by ascending id.
  OldestFirst,
}
