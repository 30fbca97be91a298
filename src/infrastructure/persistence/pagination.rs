//! # Pagination
//!
//! Explicit page request and page result types used by paged repository
//! queries.
//!
//! # Examples
//!
//! ```
//! use tour_ratings::infrastructure::persistence::{Page, PageRequest};
//!
//! let request = PageRequest::new(1, 2);
//! assert_eq!(request.offset(), 2);
//!
//! let page = Page::new(vec!["c", "d"], request, 5);
//! assert_eq!(page.total_pages(), 3);
//! assert!(page.has_next());
//! ```

use serde::{Deserialize, Serialize};

/// A request for one page of results.
///
/// Pages are zero-based. The size is clamped to `1..=MAX_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawPageRequest")]
pub struct PageRequest {
    page: u32,
    size: u32,
}

#[derive(Deserialize)]
struct RawPageRequest {
    #[serde(default)]
    page: u32,
    #[serde(default = "default_size")]
    size: u32,
}

fn default_size() -> u32 {
    PageRequest::DEFAULT_SIZE
}

impl From<RawPageRequest> for PageRequest {
    fn from(raw: RawPageRequest) -> Self {
        Self::new(raw.page, raw.size)
    }
}

impl PageRequest {
    /// Page size used when none is requested.
    pub const DEFAULT_SIZE: u32 = 20;
    /// Largest page size served.
    pub const MAX_SIZE: u32 = 100;

    /// Creates a page request, clamping `size` into the accepted range.
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, Self::MAX_SIZE),
        }
    }

    /// Returns the zero-based page number.
    #[inline]
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[inline]
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the number of items preceding this page.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}

/// One page of results plus the totals needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    request: PageRequest,
    total_elements: u64,
}

impl<T> Page<T> {
    /// Creates a page.
    #[must_use]
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            request,
            total_elements,
        }
    }

    /// Returns the items on this page.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Returns the request this page answers.
    #[must_use]
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Returns the total number of items across all pages.
    #[must_use]
    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Returns the total number of pages.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(u64::from(self.request.size()))
    }

    /// Returns true if a later page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.request.page()) + 1 < self.total_pages()
    }

    /// Converts the items, keeping the paging information.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            total_elements: self.total_elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_clamped() {
        assert_eq!(PageRequest::new(0, 0).size(), 1);
        assert_eq!(PageRequest::new(0, 1000).size(), PageRequest::MAX_SIZE);
        assert_eq!(PageRequest::default().size(), PageRequest::DEFAULT_SIZE);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn deserialized_size_is_clamped() {
        let zero: PageRequest = serde_json::from_str(r#"{"page":2,"size":0}"#).unwrap();
        assert_eq!(zero.page(), 2);
        assert_eq!(zero.size(), 1);
        assert_eq!(Page::new(Vec::<u8>::new(), zero, 3).total_pages(), 3);

        let large: PageRequest = serde_json::from_str(r#"{"size":5000}"#).unwrap();
        assert_eq!(large.size(), PageRequest::MAX_SIZE);

        let empty: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, PageRequest::default());
    }

    #[test]
    fn offset_does_not_overflow() {
        let request = PageRequest::new(u32::MAX, PageRequest::MAX_SIZE);
        assert_eq!(request.offset(), u64::from(u32::MAX) * 100);
    }

    #[test]
    fn total_pages_rounds_up() {
        let request = PageRequest::new(0, 10);
        assert_eq!(Page::<u8>::new(vec![], request, 0).total_pages(), 0);
        assert_eq!(Page::<u8>::new(vec![], request, 10).total_pages(), 1);
        assert_eq!(Page::<u8>::new(vec![], request, 11).total_pages(), 2);
    }

    #[test]
    fn has_next_on_last_page_is_false() {
        let page = Page::new(vec![1, 2], PageRequest::new(1, 2), 4);
        assert!(!page.has_next());
    }

    #[test]
    fn map_keeps_totals() {
        let page = Page::new(vec![1, 2], PageRequest::new(0, 2), 7).map(|n| n * 10);
        assert_eq!(page.content(), &[10, 20]);
        assert_eq!(page.total_elements(), 7);
        assert_eq!(page.total_pages(), 4);
    }
}
