//! Generic list controller for offset/limit paginated screens.
//!
//! DESIGN
//! ======
//! One controller instance backs each table screen: it owns the current
//! page, the page-scoped record cache, the total count, and the loading
//! flag. Fetch results are stamped with a sequence number taken at request
//! time, so a slow response that arrives after a newer request (or after a
//! local mutation) is discarded instead of overwriting fresher state.

#[cfg(test)]
#[path = "paged_test.rs"]
mod paged_test;

/// Page size used by every table screen.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// A record that can live in a [`PagedState`] collection.
pub trait PagedRecord {
    /// Identifier unique within the resource's full collection.
    fn record_id(&self) -> i64;
}

/// Paginated list state for one screen.
#[derive(Clone, Debug, PartialEq)]
pub struct PagedState<T> {
    /// Records for the current page, in display order.
    pub items: Vec<T>,
    /// Size of the full collection as last reported by the backend.
    pub total: u64,
    /// Current page, 1-based.
    pub page: u64,
    /// Requested page size; fetched pages never hold more than this.
    pub page_size: u64,
    /// `true` while a fetch is in flight.
    pub loading: bool,
    /// Sequence number of the most recent fetch.
    fetch_seq: u64,
    /// Bumped to force a refetch of the current page.
    refresh_seq: u64,
}

impl<T> Default for PagedState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            loading: false,
            fetch_seq: 0,
            refresh_seq: 0,
        }
    }
}

impl<T> PagedState<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset of the current page: `(page - 1) * page_size`.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.page_size
    }

    /// Limit sent with every page request.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// Number of pages implied by the last reported total, at least 1.
    #[must_use]
    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Key that changes exactly when the current page must be refetched.
    #[must_use]
    pub fn fetch_key(&self) -> (u64, u64) {
        (self.page, self.refresh_seq)
    }

    /// Navigate to `page` (clamped to 1). The owning view reacts to the
    /// changed [`Self::fetch_key`] by issuing a new fetch.
    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    /// Force a refetch of the current page, e.g. after a create completes.
    pub fn refresh(&mut self) {
        self.refresh_seq += 1;
    }

    /// Mark a fetch as started and return its sequence stamp.
    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.fetch_seq += 1;
        self.fetch_seq
    }

    /// Apply a fetched page. Returns `false` (leaving all state untouched)
    /// when `seq` is not the stamp of the most recent fetch.
    pub fn apply_page(&mut self, seq: u64, mut items: Vec<T>, total: u64) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        items.truncate(usize::try_from(self.page_size).unwrap_or(usize::MAX));
        self.items = items;
        self.total = total;
        self.loading = false;
        true
    }

    /// Record a failed fetch: prior records and total stay in place, only
    /// the loading flag clears. Returns `false` for stale sequence stamps.
    pub fn fetch_failed(&mut self, seq: u64) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.loading = false;
        true
    }
}

impl<T: PagedRecord> PagedState<T> {
    /// Remove the record with `id` from the current page without refetching.
    /// Returns `true` if a record was removed.
    pub fn remove_by_id(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.record_id() != id);
        if self.items.len() == before {
            return false;
        }
        self.total = self.total.saturating_sub(1);
        true
    }

    /// Replace the record sharing `record`'s id in place. Returns `true`
    /// if a record was patched.
    pub fn patch(&mut self, record: T) -> bool {
        let id = record.record_id();
        match self.items.iter_mut().find(|item| item.record_id() == id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }
}
