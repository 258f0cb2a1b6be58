//! Table view configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Per-instance view configuration.
///
/// Every field has a default, so a partial JSON document deserializes into a
/// usable config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page on mount.
    pub page_size: usize,

    /// Choices offered by the page-size selector.
    pub page_size_options: Vec<usize>,

    /// Delay between the last keystroke and applying the search text.
    pub search_debounce_ms: u64,

    /// Shown in the body while loading with nothing to display.
    pub loading_message: String,

    /// Shown in the body when no row passes the filters.
    pub empty_message: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_size_options: vec![10, 20, 30, 40, 50],
            search_debounce_ms: 200,
            loading_message: "Loading...".to_string(),
            empty_message: "No results found.".to_string(),
        }
    }
}

impl TableConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial page size.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Set the page-size selector choices.
    pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    /// Set the search debounce delay in milliseconds.
    pub fn search_debounce_ms(mut self, ms: u64) -> Self {
        self.search_debounce_ms = ms;
        self
    }

    /// Set the loading message.
    pub fn loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = message.into();
        self
    }

    /// Set the empty-result message.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// The debounce delay as a [`Duration`].
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Check that the config can drive a view.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.page_size == 0 {
            return Err(TableError::InvalidConfig("page_size must be at least 1"));
        }
        if self.page_size_options.is_empty() {
            return Err(TableError::InvalidConfig(
                "page_size_options must not be empty",
            ));
        }
        if self.page_size_options.contains(&0) {
            return Err(TableError::InvalidConfig(
                "page_size_options must not contain 0",
            ));
        }
        Ok(())
    }
}
