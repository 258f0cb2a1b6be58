//! Per-row action menus.

use std::fmt;
use std::sync::Arc;

/// One entry of a row's contextual menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Action id reported in [`TableEvent::RowAction`](crate::TableEvent::RowAction).
    pub id: String,
    pub label: String,
    /// Rendered as a dangerous action (delete, cancel).
    pub destructive: bool,
}

impl MenuItem {
    /// Create a regular menu item.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            destructive: false,
        }
    }

    /// Mark the item destructive.
    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

/// Builds the action menu for a row. Its presence adds the actions column.
pub struct RowActions<T>(Arc<dyn Fn(&T) -> Vec<MenuItem> + Send + Sync>);

impl<T> RowActions<T> {
    /// Create a menu builder.
    pub fn new(build: impl Fn(&T) -> Vec<MenuItem> + Send + Sync + 'static) -> Self {
        Self(Arc::new(build))
    }

    /// The menu for `row`.
    pub fn menu(&self, row: &T) -> Vec<MenuItem> {
        (self.0)(row)
    }
}

impl<T> Clone for RowActions<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for RowActions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RowActions(..)")
    }
}
