//! Generic tabular data view.
//!
//! A [`TableView`] holds the UI state of one list page over any row type:
//! search, facet filters, grouping, single-column sort, internal or
//! caller-driven pagination, id-based selection and a confirm-then-delete
//! flow. The building blocks are plain functions over row slices and can be
//! used without the view.

pub mod actions;
pub mod column;
pub mod config;
pub mod debounce;
pub mod error;
pub mod events;
pub mod filter;
pub mod group;
pub mod pagination;
pub mod render;
pub mod row;
pub mod selection;
pub mod view;

pub use error::TableError;
pub use events::TableEvent;
pub use render::render_text;
pub use row::{TableRow, json_field};
pub use view::{TableId, TableSnapshot, TableView};

pub mod prelude {
    pub use crate::actions::{MenuItem, RowActions};
    pub use crate::column::{Alignment, Column, SortDirection, SortKey, SortState};
    pub use crate::config::TableConfig;
    pub use crate::error::TableError;
    pub use crate::events::TableEvent;
    pub use crate::filter::{FilterDescriptor, FilterOption, SearchConfig, SearchMode};
    pub use crate::group::GroupDescriptor;
    pub use crate::pagination::PaginationState;
    pub use crate::render::render_text;
    pub use crate::row::{TableRow, json_field};
    pub use crate::selection::HeaderCheckbox;
    pub use crate::view::{Body, EmptyState, TableSnapshot, TableView};
}
