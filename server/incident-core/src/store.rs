//! Incident persistence: abstract store trait + in-memory implementation.

use std::sync::Mutex;

use chrono::Utc;

use crate::error::{Error, Result};
use crate::types::{IncidentReport, SortOrder, Status};

/// Abstract incident repository. Implementations must make each call
/// atomic with respect to a single record's read-modify-write cycle; the
/// transition policy itself lives in the service, not here.
pub trait IncidentStore: Send + Sync {
  /// Persist a new record: assigns the id, stamps `created_at = now`.
  fn create(&self, title: &str, location: &str, status: Status) -> Result<IncidentReport>;

  /// Fetch one record by id.
  fn get(&self, id: i64) -> Result<IncidentReport>;

  /// All records matching the filter, in the requested order. Ordering is
  /// an explicit argument rather than implicit store state.
  fn list(&self, filter: Option<Status>, order: SortOrder) -> Vec<IncidentReport>;

  /// Persist a new status for an existing record.
  fn update_status(&self, id: i64, status: Status) -> Result<IncidentReport>;

  /// Remove a record. A second delete of the same id is `NotFound` again.
  fn delete(&self, id: i64) -> Result<()>;
}

/// In-memory store: one mutex over the whole table, which serializes every
/// per-record mutation (no stale-read race between two status updates).
#[derive(Debug, Default)]
pub struct MemoryStore {
  inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
  next_id: i64,
  rows: Vec<IncidentReport>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
    // A poisoned lock means a panic mid-mutation; the table is still
    // structurally sound (Vec ops complete or don't), so keep serving.
    self.inner.lock().unwrap_or_else(|e| e.into_inner())
  }
}

impl IncidentStore for MemoryStore {
  fn create(&self, title: &str, location: &str, status: Status) -> Result<IncidentReport> {
    if title.trim().is_empty() {
      return Err(Error::validation("title", "This field may not be blank."));
    }
    if location.trim().is_empty() {
      return Err(Error::validation("location", "This field may not be blank."));
    }

    let mut inner = self.lock();
    inner.next_id += 1;
    let record = IncidentReport {
      id: inner.next_id,
      title: title.to_string(),
      location: location.to_string(),
      status,
      created_at: Utc::now(),
    };
    inner.rows.push(record.clone());
    Ok(record)
  }

  fn get(&self, id: i64) -> Result<IncidentReport> {
    let inner = self.lock();
    inner
      .rows
      .iter()
      .find(|r| r.id == id)
      .cloned()
      .ok_or(Error::NotFound(id))
  }

  fn list(&self, filter: Option<Status>, order: SortOrder) -> Vec<IncidentReport> {
    let inner = self.lock();
    let mut rows: Vec<IncidentReport> = inner
      .rows
      .iter()
      .filter(|r| filter.map_or(true, |s| r.status == s))
      .cloned()
      .collect();
    // Ties on created_at (bulk creation) break by id so the order is total.
    rows.sort_by_key(|r| (r.created_at, r.id));
    if order == SortOrder::NewestFirst {
      rows.reverse();
    }
    rows
  }

  fn update_status(&self, id: i64, status: Status) -> Result<IncidentReport> {
    let mut inner = self.lock();
    let row = inner
      .rows
      .iter_mut()
      .find(|r| r.id == id)
      .ok_or(Error::NotFound(id))?;
    row.status = status;
    Ok(row.clone())
  }

  fn delete(&self, id: i64) -> Result<()> {
    let mut inner = self.lock();
    let before = inner.rows.len();
    inner.rows.retain(|r| r.id != id);
    if inner.rows.len() == before {
      return Err(Error::NotFound(id));
    }
    Ok(())
  }
}
