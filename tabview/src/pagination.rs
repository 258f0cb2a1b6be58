//! Page state and slicing.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl PaginationState {
    /// First page with the given size.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size,
        }
    }

    /// The same size at another page.
    pub fn at(self, page_index: usize) -> Self {
        Self { page_index, ..self }
    }
}

/// Who slices the rows into pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// The view slices its filtered rows itself.
    Internal(PaginationState),
    /// The caller supplies one page of rows and the total across all pages.
    /// The view never re-slices; navigation is requested via events.
    External {
        state: PaginationState,
        row_count: usize,
    },
}

impl PaginationMode {
    /// The current page state.
    pub fn state(&self) -> PaginationState {
        match self {
            PaginationMode::Internal(state) => *state,
            PaginationMode::External { state, .. } => *state,
        }
    }

    /// Check if the caller drives paging.
    pub fn is_external(&self) -> bool {
        matches!(self, PaginationMode::External { .. })
    }
}

/// Number of pages needed for `total` rows. Zero rows means zero pages.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// The index range of `state`'s page within `total` rows, clamped to the
/// rows that exist.
pub fn page_range(total: usize, state: PaginationState) -> Range<usize> {
    let size = state.page_size.max(1);
    let start = state.page_index.saturating_mul(size).min(total);
    let end = start.saturating_add(size).min(total);
    start..end
}
