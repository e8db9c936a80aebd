//! Shared application state.

use incident_core::{IncidentService, MemoryStore};

pub struct AppState {
  pub service: IncidentService<MemoryStore>,
}

impl AppState {
  pub fn new() -> Self {
    Self {
      service: IncidentService::new(MemoryStore::new()),
    }
  }
}

impl Default for AppState {
  fn default() -> Self {
    Self::new()
  }
}
