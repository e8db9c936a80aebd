//! Page-window pagination over an ordered result set.

use crate::error::{Error, Result};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Parsed pagination parameters. `page` is 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
  pub page: usize,
  pub page_size: usize,
}

impl Default for PageParams {
  fn default() -> Self {
    Self {
      page: 1,
      page_size: DEFAULT_PAGE_SIZE,
    }
  }
}

impl PageParams {
  /// Parse raw query values.
  ///
  /// `page` must be a positive integer when present (`InvalidPage`
  /// otherwise). `page_size` is lenient: unparsable or non-positive values
  /// fall back to the default; values above the ceiling are clamped.
  pub fn from_raw(page: Option<&str>, page_size: Option<&str>) -> Result<Self> {
    let page = match page {
      None => 1,
      Some(raw) => match raw.parse::<usize>() {
        Ok(n) if n >= 1 => n,
        _ => return Err(Error::InvalidPage(format!("\"{}\" is not a valid page number.", raw))),
      },
    };

    let page_size = page_size
      .and_then(|raw| raw.parse::<usize>().ok())
      .filter(|&n| n >= 1)
      .unwrap_or(DEFAULT_PAGE_SIZE)
      .min(MAX_PAGE_SIZE);

    Ok(Self { page, page_size })
  }
}

/// One page window over an ordered sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
  /// Total number of items across all pages (the filtered set's size).
  pub count: usize,
  pub page: usize,
  pub page_size: usize,
  pub has_next: bool,
  pub has_previous: bool,
  pub results: Vec<T>,
}

/// Slice one page out of an already-filtered, already-ordered sequence.
/// Out-of-range pages yield an empty window, never an error.
pub fn paginate<T>(items: Vec<T>, params: PageParams) -> Page<T> {
  let count = items.len();
  let start = (params.page - 1).saturating_mul(params.page_size);
  let end = start.saturating_add(params.page_size).min(count);

  let results: Vec<T> = if start < count {
    items.into_iter().skip(start).take(end - start).collect()
  } else {
    Vec::new()
  };

  Page {
    count,
    page: params.page,
    page_size: params.page_size,
    has_next: params.page.saturating_mul(params.page_size) < count,
    has_previous: params.page > 1,
    results,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_apply_when_absent() {
    let params = PageParams::from_raw(None, None).unwrap();
    assert_eq!(params, PageParams::default());
  }

  #[test]
  fn page_must_be_a_positive_integer() {
    for bad in ["0", "-1", "abc", "1.5", ""] {
      let err = PageParams::from_raw(Some(bad), None).unwrap_err();
      assert!(matches!(err, Error::InvalidPage(_)), "page {bad:?}");
    }
  }

  #[test]
  fn page_size_is_lenient_and_clamped() {
    let p = PageParams::from_raw(None, Some("25")).unwrap();
    assert_eq!(p.page_size, 25);
    // Ceiling.
    let p = PageParams::from_raw(None, Some("500")).unwrap();
    assert_eq!(p.page_size, MAX_PAGE_SIZE);
    // Garbage falls back to the default.
    for bad in ["0", "-3", "many"] {
      let p = PageParams::from_raw(None, Some(bad)).unwrap();
      assert_eq!(p.page_size, DEFAULT_PAGE_SIZE, "page_size {bad:?}");
    }
  }

  #[test]
  fn fifteen_items_split_ten_five() {
    let items: Vec<u32> = (0..15).collect();
    let first = paginate(items.clone(), PageParams { page: 1, page_size: 10 });
    assert_eq!(first.count, 15);
    assert_eq!(first.results.len(), 10);
    assert!(first.has_next);
    assert!(!first.has_previous);

    let second = paginate(items, PageParams { page: 2, page_size: 10 });
    assert_eq!(second.results.len(), 5);
    assert!(!second.has_next);
    assert!(second.has_previous);
  }

  #[test]
  fn windows_partition_the_sequence() {
    let items: Vec<u32> = (0..37).collect();
    let size = 10;
    let mut seen = Vec::new();
    let mut page = 1;
    loop {
      let window = paginate(items.clone(), PageParams { page, page_size: size });
      seen.extend(window.results.iter().copied());
      if !window.has_next {
        break;
      }
      page += 1;
    }
    assert_eq!(seen, items);
  }

  #[test]
  fn out_of_range_page_is_empty_not_an_error() {
    let items: Vec<u32> = (0..3).collect();
    let window = paginate(items, PageParams { page: 9, page_size: 10 });
    assert_eq!(window.count, 3);
    assert!(window.results.is_empty());
    assert!(!window.has_next);
    assert!(window.has_previous);
  }

  #[test]
  fn huge_page_number_is_an_empty_window() {
    // usize::MAX is still a positive integer, so it parses; the window
    // math must saturate instead of overflowing.
    let params = PageParams::from_raw(Some("18446744073709551615"), None).unwrap();
    let window = paginate(vec![1, 2, 3], params);
    assert_eq!(window.count, 3);
    assert!(window.results.is_empty());
    assert!(!window.has_next);
    assert!(window.has_previous);
  }

  #[test]
  fn empty_input_has_no_pages_either_way() {
    let window = paginate(Vec::<u32>::new(), PageParams::default());
    assert_eq!(window.count, 0);
    assert!(window.results.is_empty());
    assert!(!window.has_next);
    assert!(!window.has_previous);
  }
}
