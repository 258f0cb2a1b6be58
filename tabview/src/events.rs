//! Outbound table events.
//!
//! The view pushes events onto its queue as interactions happen. The caller
//! drains the queue after each interaction and performs the persistence or
//! navigation the event asks for.

use std::collections::VecDeque;

use crate::column::SortState;
use crate::pagination::PaginationState;

/// A notification for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent<T> {
    /// External mode only: the caller should fetch this page and hand it
    /// back through `set_external_pagination`.
    PaginationChange(PaginationState),
    /// The sort column or direction changed. `None` means unsorted.
    SortChange(Option<SortState>),
    /// The user confirmed deleting these rows.
    DeleteSelected(Vec<T>),
    /// A row-menu item was activated.
    RowAction {
        row_id: String,
        action: String,
        row: T,
    },
    /// The Add button was clicked.
    Add,
    /// The Import button was clicked.
    Import,
}

/// FIFO queue of pending events.
#[derive(Debug, Clone)]
pub struct EventQueue<T> {
    events: VecDeque<TableEvent<T>>,
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }
}

impl<T> EventQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event.
    pub fn push(&mut self, event: TableEvent<T>) {
        self.events.push_back(event);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<TableEvent<T>> {
        self.events.drain(..).collect()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no event is pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
