//! Business operations behind the HTTP boundary.
//!
//! The service owns the order of checks: schema validation, then the
//! transition policy, then the store. A rejection at any step leaves the
//! store untouched.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::pagination::{paginate, Page, PageParams};
use crate::policy;
use crate::schema;
use crate::store::IncidentStore;
use crate::types::{CreateIncident, IncidentReport, SortOrder, Status};

pub struct IncidentService<S: IncidentStore> {
  store: S,
}

impl<S: IncidentStore> IncidentService<S> {
  pub fn new(store: S) -> Self {
    Self { store }
  }

  /// Validate and persist a new incident. Status defaults to `open`; an
  /// explicit, enumeration-valid status is accepted as-is.
  pub fn create_incident(&self, raw: CreateIncident) -> Result<IncidentReport> {
    let new = schema::validate_create(&raw)?;
    self.store.create(&new.title, &new.location, new.status)
  }

  /// Filtered, paginated listing, newest first. Unknown filter values
  /// yield an empty page rather than an error.
  pub fn list_incidents(
    &self,
    status_filter: Option<&str>,
    params: PageParams,
  ) -> Page<IncidentReport> {
    let rows = match status_filter {
      None => self.store.list(None, SortOrder::NewestFirst),
      Some(raw) => match Status::parse(raw) {
        Some(status) => self.store.list(Some(status), SortOrder::NewestFirst),
        None => Vec::new(),
      },
    };
    paginate(rows, params)
  }

  /// Every record, newest first, no filter or pagination. Read API for the
  /// HTML listing consumer.
  pub fn list_all(&self) -> Vec<IncidentReport> {
    self.store.list(None, SortOrder::NewestFirst)
  }

  /// Partial update: the payload must be exactly `{"status": "..."}` and
  /// the transition must be legal for the record's current status.
  pub fn update_status(&self, id: i64, payload: &Map<String, Value>) -> Result<IncidentReport> {
    let requested = schema::validate_update_shape(payload)?;
    let current = self.store.get(id)?;

    let target = policy::validate_transition(current.status, requested)
      .map_err(|e| Error::validation("status", e.to_string()))?;

    self.store.update_status(id, target)
  }

  pub fn delete_incident(&self, id: i64) -> Result<()> {
    self.store.delete(id)
  }

  pub fn get_incident(&self, id: i64) -> Result<IncidentReport> {
    self.store.get(id)
  }
}
