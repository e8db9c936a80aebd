//! Incident Report Core — transport-agnostic workflow engine.
//!
//! Validates incident creation, enforces the forward-only status
//! transition policy (open -> in_progress -> resolved, resolved terminal),
//! and paginates filtered listings over an abstract store.
//!
//! No DB, no network; pure computation + in-memory state.

pub mod error;
pub mod pagination;
pub mod policy;
pub mod schema;
pub mod seed;
pub mod service;
pub mod store;
pub mod types;

pub use error::{Error, FieldErrors, Result};
pub use pagination::{Page, PageParams};
pub use policy::TransitionError;
pub use service::IncidentService;
pub use store::{IncidentStore, MemoryStore};
pub use types::{CreateIncident, IncidentReport, SortOrder, Status};
