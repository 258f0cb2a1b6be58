//! Table view error types.

use thiserror::Error;

/// Errors raised when a caller drives a [`TableView`](crate::TableView) with
/// identifiers or settings that don't match its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// No filter descriptor with this id.
    #[error("unknown filter '{0}'")]
    UnknownFilter(String),

    /// The value is not one of the facet's options.
    #[error("filter '{filter}' has no option '{value}'")]
    UnknownFilterOption {
        /// The filter id.
        filter: String,
        /// The rejected value.
        value: String,
    },

    /// No group descriptor with this id.
    #[error("unknown group '{0}'")]
    UnknownGroup(String),

    /// No column with this id.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// The column exists but was not marked sortable.
    #[error("column '{0}' is not sortable")]
    ColumnNotSortable(String),

    /// No row in the current data has this id.
    #[error("unknown row '{0}'")]
    UnknownRow(String),

    /// The row's action menu has no item with this id.
    #[error("row '{row}' has no action '{action}'")]
    UnknownRowAction {
        /// The row id.
        row: String,
        /// The rejected action id.
        action: String,
    },

    /// A configuration value is out of range.
    #[error("invalid table config: {0}")]
    InvalidConfig(&'static str),
}
