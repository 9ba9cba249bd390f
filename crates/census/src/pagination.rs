//! Page cursor shared by every listing loop.
//!
//! GitHub listings are walked with `page=N&per_page=M` until a page comes back
//! empty. A short page is *not* treated as the last one: a listing whose final
//! page is exactly full still costs one more request to observe the empty
//! page.

use crate::PageNumber;

/// Tracks the next page to request in a "fetch, test empty, advance" loop.
///
/// ```
/// use census::PageCursor;
///
/// let mut cursor = PageCursor::new();
/// assert_eq!(cursor.next_page().map(|p| p.as_u32()), Some(1));
/// cursor.record(100);
/// assert_eq!(cursor.next_page().map(|p| p.as_u32()), Some(2));
/// cursor.record(0);
/// assert!(cursor.next_page().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    next: Option<PageNumber>,
    fetched: usize,
}

impl PageCursor {
    /// Creates a cursor positioned on the first page.
    pub fn new() -> Self {
        Self {
            next: Some(PageNumber::FIRST),
            fetched: 0,
        }
    }

    /// Returns the page to request next, or `None` once an empty page has
    /// been recorded.
    pub fn next_page(&self) -> Option<PageNumber> {
        self.next
    }

    /// Records the item count of the page returned by [`Self::next_page`].
    ///
    /// An empty page exhausts the cursor; any other count advances it.
    pub fn record(&mut self, item_count: usize) {
        self.fetched += item_count;
        self.next = match self.next {
            Some(page) if item_count > 0 => Some(page.next()),
            _ => None,
        };
    }

    /// Total number of items recorded across all pages so far.
    pub fn fetched(&self) -> usize {
        self.fetched
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}
