//! Offset/limit paging
//!
//! [`paginate`] slices a resolved result set into one page. [`Paging`] holds
//! the metadata returned alongside that page and derives the navigation
//! values clients need (current page, page count, next/previous offsets and
//! a centred window of page numbers).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Slice `results` into the page starting at `offset` with at most `limit` items.
///
/// Returns the page and the length of the full result set. An offset at or
/// past the end yields an empty page, not an error. Inputs are expected to be
/// validated by the caller (`limit >= 1`).
pub fn paginate<T: Clone>(results: &[T], limit: usize, offset: usize) -> (Vec<T>, usize) {
    let total = results.len();
    let start = offset.min(total);
    let end = offset.saturating_add(limit).min(total);
    (results[start..end].to_vec(), total)
}

/// Paging metadata: `total` results, the `offset` of this page and the page size `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPaging")]
pub struct Paging {
    total: usize,
    offset: usize,
    limit: usize,
}

#[derive(Deserialize)]
struct RawPaging {
    total: usize,
    offset: usize,
    limit: usize,
}

impl TryFrom<RawPaging> for Paging {
    type Error = Error;

    fn try_from(raw: RawPaging) -> Result<Self> {
        Paging::new(raw.total, raw.offset, raw.limit)
    }
}

impl Paging {
    /// Build paging metadata. `limit` must be at least 1.
    pub fn new(total: usize, offset: usize, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(Error::InvalidPaging(
                "Limit must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            total,
            offset,
            limit,
        })
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 1-indexed page containing `offset`.
    pub fn current_page(&self) -> usize {
        (self.offset / self.limit).saturating_add(1)
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.limit)
    }

    pub fn has_next_page(&self) -> bool {
        self.offset.saturating_add(self.limit) < self.total
    }

    pub fn has_previous_page(&self) -> bool {
        self.offset > 0
    }

    pub fn next_page_offset(&self) -> Option<usize> {
        self.has_next_page().then(|| self.offset.saturating_add(self.limit))
    }

    pub fn previous_page_offset(&self) -> Option<usize> {
        self.has_previous_page()
            .then(|| self.offset.saturating_sub(self.limit))
    }

    /// Offset of the first result on 1-indexed `page`, or `None` when the
    /// offset does not fit in a `usize`. Page 0 is treated as page 1.
    pub fn offset_for_page(&self, page: usize) -> Option<usize> {
        page.saturating_sub(1).checked_mul(self.limit)
    }

    /// Page numbers to show in a pager of at most `max_pages` entries.
    ///
    /// The window is centred on the current page and shifted to stay inside
    /// `[1, total_pages]`, keeping its full width near either edge.
    pub fn page_range(&self, max_pages: usize) -> Vec<usize> {
        let total_pages = self.total_pages();
        if total_pages <= max_pages {
            return (1..=total_pages).collect();
        }
        if max_pages == 0 {
            return Vec::new();
        }

        let current = self.current_page().min(total_pages);
        let half = max_pages / 2;
        let mut start = current.saturating_sub(half).max(1);
        let end = start.saturating_add(max_pages - 1).min(total_pages);

        if end - start < max_pages - 1 {
            start = end.saturating_sub(max_pages - 1).max(1);
        }

        (start..=end).collect()
    }

    /// Human-readable range of the results on this page, e.g. `1-10 de 100`.
    pub fn results_range_text(&self) -> String {
        let from = self.offset.saturating_add(1);
        let to = self.offset.saturating_add(self.limit).min(self.total);
        format!("{}-{} de {}", from, to, self.total)
    }
}
