//! Request/response types for the HTTP boundary.

use incident_core::{IncidentReport, Page};
use serde::{Deserialize, Serialize};

/// Query parameters for the list endpoint. Raw strings so pagination can
/// apply its own parsing contract (strict `page`, lenient `page_size`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
  #[serde(default)]
  pub status: Option<String>,
  #[serde(default)]
  pub page: Option<String>,
  #[serde(default)]
  pub page_size: Option<String>,
}

/// Paginated list body: `{count, next, previous, results}` with nullable
/// page URLs.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
  pub count: usize,
  pub next: Option<String>,
  pub previous: Option<String>,
  pub results: Vec<IncidentReport>,
}

impl ListResponse {
  /// Wrap a page window, deriving the neighbour-page URLs from the
  /// original query so `status` and `page_size` survive navigation.
  pub fn from_page(page: Page<IncidentReport>, query: &ListQuery) -> Self {
    let next = page.has_next.then(|| page_url(page.page + 1, query));
    let previous = page.has_previous.then(|| page_url(page.page - 1, query));
    Self {
      count: page.count,
      next,
      previous,
      results: page.results,
    }
  }
}

fn page_url(page: usize, query: &ListQuery) -> String {
  let mut url = format!("/incidents/?page={}", page);
  if let Some(size) = &query.page_size {
    url.push_str(&format!("&page_size={}", size));
  }
  if let Some(status) = &query.status {
    url.push_str(&format!("&status={}", status));
  }
  url
}

#[cfg(test)]
mod tests {
  use super::*;
  use incident_core::PageParams;

  #[test]
  fn neighbour_urls_keep_query_parameters() {
    let page = incident_core::pagination::paginate(
      Vec::<IncidentReport>::new(),
      PageParams { page: 2, page_size: 5 },
    );
    // Empty set: no next, but previous still reflects page > 1.
    let query = ListQuery {
      status: Some("open".into()),
      page: Some("2".into()),
      page_size: Some("5".into()),
    };
    let body = ListResponse::from_page(page, &query);
    assert_eq!(body.next, None);
    let prev = body.previous.unwrap();
    assert!(prev.contains("page=1"));
    assert!(prev.contains("page_size=5"));
    assert!(prev.contains("status=open"));
  }
}
