//! Search and facet filtering.
//!
//! Everything here is a pure function of its inputs. The view recomputes the
//! visible set on every call instead of caching it; row sets are bounded by a
//! page or a capped list fetch.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};

use crate::row::TableRow;

type Accessor<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

// =============================================================================
// Facets
// =============================================================================

/// One selectable value of a facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Text shown in the dropdown.
    pub label: String,
    /// Value compared against the accessor output.
    pub value: String,
}

impl FilterOption {
    /// Create an option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Declares one facet the table can filter on.
///
/// The accessor must return a string for every row; a missing field should
/// map to `""` rather than panic.
pub struct FilterDescriptor<T> {
    /// Unique facet id.
    pub id: String,
    /// Dropdown label.
    pub label: String,
    /// Fixed option set.
    pub options: Vec<FilterOption>,
    /// Selection applied on mount and on reset.
    pub default_value: Option<String>,
    accessor: Accessor<T>,
}

impl<T> FilterDescriptor<T> {
    /// Create a facet with no options.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        accessor: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            options: Vec::new(),
            default_value: None,
            accessor: Arc::new(accessor),
        }
    }

    /// Add an option.
    pub fn option(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(FilterOption::new(label, value));
        self
    }

    /// Set the default selection.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// The facet value of `row`.
    pub fn value_of(&self, row: &T) -> String {
        (self.accessor)(row)
    }

    /// Check whether `value` is one of the declared options.
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

impl<T> Clone for FilterDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            options: self.options.clone(),
            default_value: self.default_value.clone(),
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<T> fmt::Debug for FilterDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterDescriptor")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("options", &self.options)
            .field("default_value", &self.default_value)
            .finish_non_exhaustive()
    }
}

/// Active value per facet.
///
/// An empty value is never stored: clearing a facet removes it, so every
/// entry is an active constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelections(BTreeMap<String, String>);

impl FilterSelections {
    /// Create an empty selection map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selections from each descriptor's default value.
    pub fn from_defaults<T>(filters: &[FilterDescriptor<T>]) -> Self {
        let mut selections = Self::new();
        for filter in filters {
            if let Some(value) = &filter.default_value {
                selections.set(&filter.id, value);
            }
        }
        selections
    }

    /// Set a facet's value. An empty value clears it.
    /// Returns true if the stored selection changed.
    pub fn set(&mut self, id: &str, value: &str) -> bool {
        if value.is_empty() {
            return self.0.remove(id).is_some();
        }
        match self.0.get(id) {
            Some(current) if current == value => false,
            _ => {
                self.0.insert(id.to_string(), value.to_string());
                true
            }
        }
    }

    /// Clear a facet. Returns true if it was set.
    pub fn clear(&mut self, id: &str) -> bool {
        self.0.remove(id).is_some()
    }

    /// The value selected for `id`.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Active `(facet id, value)` pairs.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check if no facet constrains the rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Search
// =============================================================================

/// How the query is matched against a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// Case-insensitive substring.
    #[default]
    Contains,
    /// Case-insensitive fuzzy pattern (nucleo).
    Fuzzy,
}

/// Enables the search box and names the fields it matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Placeholder shown in an empty search box.
    pub placeholder: String,
    /// Dot-separated field paths.
    pub fields: Vec<String>,
    /// Match mode.
    pub mode: SearchMode,
}

impl SearchConfig {
    /// Search over the given field paths.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            placeholder: "Search...".to_string(),
            fields: fields.into_iter().map(Into::into).collect(),
            mode: SearchMode::Contains,
        }
    }

    /// Set the placeholder.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Switch to fuzzy matching.
    pub fn fuzzy(mut self) -> Self {
        self.mode = SearchMode::Fuzzy;
        self
    }
}

/// A query compiled once per filter pass.
enum QueryMatcher {
    Contains(String),
    Fuzzy {
        matcher: Box<Matcher>,
        pattern: Pattern,
        buf: Vec<char>,
    },
}

impl QueryMatcher {
    fn new(query: &str, mode: SearchMode) -> Self {
        match mode {
            SearchMode::Contains => Self::Contains(query.to_lowercase()),
            SearchMode::Fuzzy => Self::Fuzzy {
                matcher: Box::new(Matcher::new(Config::DEFAULT)),
                pattern: Pattern::new(
                    query,
                    CaseMatching::Ignore,
                    Normalization::Smart,
                    AtomKind::Fuzzy,
                ),
                buf: Vec::new(),
            },
        }
    }

    fn is_match(&mut self, haystack: &str) -> bool {
        match self {
            Self::Contains(needle) => haystack.to_lowercase().contains(needle.as_str()),
            Self::Fuzzy {
                matcher,
                pattern,
                buf,
            } => {
                let haystack = Utf32Str::new(haystack, buf);
                pattern.score(haystack, matcher).is_some()
            }
        }
    }

    fn matches_row<T: TableRow>(&mut self, row: &T, fields: &[String]) -> bool {
        fields.iter().any(|path| {
            let text = row.field(path).unwrap_or_default();
            self.is_match(&text)
        })
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Indices of the rows that pass search and every active facet, in data
/// order.
///
/// - An empty `query`, or no `search` config, applies no text constraint.
/// - Selections naming a facet that isn't in `filters` are ignored.
pub fn filter_indices<T: TableRow>(
    rows: &[T],
    query: &str,
    search: Option<&SearchConfig>,
    filters: &[FilterDescriptor<T>],
    selections: &FilterSelections,
) -> Vec<usize> {
    let constraints: Vec<(&FilterDescriptor<T>, &str)> = selections
        .active()
        .filter_map(|(id, value)| filters.iter().find(|f| f.id == id).map(|f| (f, value)))
        .collect();

    let mut matcher = match search {
        Some(config) if !query.is_empty() => {
            Some((QueryMatcher::new(query, config.mode), config))
        }
        _ => None,
    };

    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            constraints
                .iter()
                .all(|(filter, value)| filter.value_of(row) == *value)
        })
        .filter(|(_, row)| match matcher.as_mut() {
            Some((m, config)) => m.matches_row(*row, &config.fields),
            None => true,
        })
        .map(|(index, _)| index)
        .collect()
}

/// Rows that pass search and every active facet, in data order.
pub fn filter_rows<'a, T: TableRow>(
    rows: &'a [T],
    query: &str,
    search: Option<&SearchConfig>,
    filters: &[FilterDescriptor<T>],
    selections: &FilterSelections,
) -> Vec<&'a T> {
    filter_indices(rows, query, search, filters, selections)
        .into_iter()
        .map(|i| &rows[i])
        .collect()
}
