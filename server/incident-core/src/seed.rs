//! Deterministic demo fixtures.

use crate::error::Result;
use crate::service::IncidentService;
use crate::store::IncidentStore;
use crate::types::CreateIncident;

const TITLES: [&str; 15] = [
  "Car accident",
  "Fire alarm",
  "Medical emergency",
  "Burglary reported",
  "Gas leak",
  "Lost child",
  "Traffic jam",
  "Flood warning",
  "Power outage",
  "Suspicious package",
  "Assault report",
  "Roadblock",
  "Animal control",
  "Water main break",
  "Noise complaint",
];

const LOCATIONS: [&str; 7] = [
  "100 Main St",
  "200 Oak Ave",
  "Downtown Plaza",
  "Westside Park",
  "East Mall",
  "South Station",
  "North Bridge",
];

const STATUSES: [&str; 3] = ["open", "in_progress", "resolved"];

/// Create 15 demo incidents through the service so normal validation
/// applies. Deterministic: titles in order, locations and statuses cycling.
pub fn seed_demo_incidents<S: IncidentStore>(service: &IncidentService<S>) -> Result<usize> {
  for (i, title) in TITLES.iter().enumerate() {
    service.create_incident(CreateIncident {
      title: Some((*title).to_string()),
      location: Some(LOCATIONS[i % LOCATIONS.len()].to_string()),
      status: Some(STATUSES[i % STATUSES.len()].to_string()),
    })?;
  }
  Ok(TITLES.len())
}
