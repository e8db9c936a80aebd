//! Schema validation: raw inbound payloads -> validated data.
//!
//! Creation errors are collected per field rather than raised at the first
//! failure, so a payload missing both title and location reports both.

use serde_json::{Map, Value};

use crate::error::{Error, FieldErrors};
use crate::types::{CreateIncident, NewIncident, Status};

const REQUIRED: &str = "This field is required.";
const BLANK: &str = "This field may not be blank.";

/// Validate a creation payload.
///
/// `title` and `location` must be present and non-blank. `status` defaults
/// to `open`; an explicit value is accepted as-is when it is a member of
/// the enumeration (no transition check applies to the initial value).
pub fn validate_create(raw: &CreateIncident) -> Result<NewIncident, Error> {
  let mut errors = FieldErrors::new();

  let title = require_text("title", raw.title.as_deref(), &mut errors);
  let location = require_text("location", raw.location.as_deref(), &mut errors);

  let status = match raw.status.as_deref() {
    None => Some(Status::Open),
    Some(s) => match Status::parse(s) {
      Some(status) => Some(status),
      None => {
        errors.push("status", format!("\"{}\" is not a valid choice.", s));
        None
      }
    },
  };

  // A None in any slot pushed a field error above.
  match (title, location, status) {
    (Some(title), Some(location), Some(status)) if errors.is_empty() => Ok(NewIncident {
      title,
      location,
      status,
    }),
    _ => Err(Error::Validation(errors)),
  }
}

fn require_text(field: &str, value: Option<&str>, errors: &mut FieldErrors) -> Option<String> {
  match value {
    None => {
      errors.push(field, REQUIRED);
      None
    }
    Some(s) if s.trim().is_empty() => {
      errors.push(field, BLANK);
      None
    }
    Some(s) => Some(s.to_string()),
  }
}

/// Enforce the partial-update shape contract: the payload's key set must be
/// exactly `{"status"}` and the value must be a JSON string. Runs before
/// the record is loaded.
pub fn validate_update_shape(payload: &Map<String, Value>) -> Result<&str, Error> {
  let bad_shape = || {
    Error::BadUpdateShape("Only 'status' may be updated and it must be provided.".to_string())
  };

  if payload.len() != 1 {
    return Err(bad_shape());
  }
  let value = payload.get("status").ok_or_else(bad_shape)?;
  value
    .as_str()
    .ok_or_else(|| Error::validation("status", "Status must be a string."))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn raw(title: Option<&str>, location: Option<&str>, status: Option<&str>) -> CreateIncident {
    CreateIncident {
      title: title.map(String::from),
      location: location.map(String::from),
      status: status.map(String::from),
    }
  }

  #[test]
  fn valid_payload_defaults_to_open() {
    let new = validate_create(&raw(Some("Car accident"), Some("1000 W Main St"), None)).unwrap();
    assert_eq!(new.title, "Car accident");
    assert_eq!(new.location, "1000 W Main St");
    assert_eq!(new.status, Status::Open);
  }

  #[test]
  fn explicit_valid_status_is_accepted() {
    let new = validate_create(&raw(Some("t"), Some("l"), Some("in_progress"))).unwrap();
    assert_eq!(new.status, Status::InProgress);
  }

  #[test]
  fn missing_and_blank_fields_are_both_reported() {
    let err = validate_create(&raw(Some(""), None, None)).unwrap_err();
    match err {
      Error::Validation(errors) => {
        assert!(errors.contains("title"));
        assert!(errors.contains("location"));
      }
      other => panic!("expected Validation, got {other:?}"),
    }
  }

  #[test]
  fn whitespace_only_counts_as_blank() {
    let err = validate_create(&raw(Some("   "), Some("l"), None)).unwrap_err();
    match err {
      Error::Validation(errors) => assert!(errors.contains("title")),
      other => panic!("expected Validation, got {other:?}"),
    }
  }

  #[test]
  fn invalid_status_choice_is_a_field_error() {
    let err = validate_create(&raw(Some("t"), Some("l"), Some("escalated"))).unwrap_err();
    match err {
      Error::Validation(errors) => assert!(errors.contains("status")),
      other => panic!("expected Validation, got {other:?}"),
    }
  }

  #[test]
  fn update_shape_accepts_exactly_status() {
    let payload: Map<String, Value> =
      serde_json::from_str(r#"{"status": "in_progress"}"#).unwrap();
    assert_eq!(validate_update_shape(&payload).unwrap(), "in_progress");
  }

  #[test]
  fn update_shape_rejects_other_keys() {
    for body in [
      r#"{"title": "x"}"#,
      r#"{"status": "resolved", "title": "x"}"#,
      r#"{}"#,
    ] {
      let payload: Map<String, Value> = serde_json::from_str(body).unwrap();
      let err = validate_update_shape(&payload).unwrap_err();
      assert!(matches!(err, Error::BadUpdateShape(_)), "body {body}");
    }
  }

  #[test]
  fn update_shape_rejects_non_string_status() {
    let payload: Map<String, Value> = serde_json::from_str(r#"{"status": 3}"#).unwrap();
    let err = validate_update_shape(&payload).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
  }
}
