//! Status transition policy.
//!
//! The workflow is forward-only:
//!
//! - open -> in_progress
//! - in_progress -> resolved
//!
//! Everything else is rejected: same-state updates, backward moves, state
//! skipping, anything out of `resolved` (terminal), and unrecognized status
//! values. The policy is pure; callers run it before touching the store.

use thiserror::Error;

use crate::types::Status;

/// Why a requested transition was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
  #[error("\"{0}\" is not a valid choice.")]
  UnknownStatus(String),

  #[error("Resolved incidents cannot be updated.")]
  Frozen,

  #[error("Cannot change status from '{from}' to '{to}'.")]
  Illegal { from: Status, to: Status },
}

impl Status {
  /// Allowed successor states, as data. `Resolved` has none.
  pub fn successors(self) -> &'static [Status] {
    match self {
      Status::Open => &[Status::InProgress],
      Status::InProgress => &[Status::Resolved],
      Status::Resolved => &[],
    }
  }
}

/// True iff `current -> requested` is an allowed edge.
pub fn can_transition(current: Status, requested: Status) -> bool {
  current.successors().contains(&requested)
}

/// Validate a raw requested status against the current one. Returns the
/// parsed target status on success.
pub fn validate_transition(current: Status, requested: &str) -> Result<Status, TransitionError> {
  let target =
    Status::parse(requested).ok_or_else(|| TransitionError::UnknownStatus(requested.to_string()))?;

  if current == Status::Resolved {
    return Err(TransitionError::Frozen);
  }
  if !can_transition(current, target) {
    return Err(TransitionError::Illegal {
      from: current,
      to: target,
    });
  }
  Ok(target)
}
