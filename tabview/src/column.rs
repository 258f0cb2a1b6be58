//! Column definitions and sorting.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::group::compare_labels;

type CellFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type SortKeyFn<T> = Arc<dyn Fn(&T) -> SortKey + Send + Sync>;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Sortable value extracted from a row.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// No value. Sorts after every other key in both directions.
    None,
    Numeric(f64),
    Text(String),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Numeric(_) => 0,
            SortKey::Text(_) => 1,
            SortKey::None => 2,
        }
    }

    /// Ascending comparison: numbers before text.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Numeric(a), SortKey::Numeric(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => compare_labels(a, b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Sort order for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The single active sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    /// Ascending sort on `column`.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `column`.
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Sort state after a click on `column`'s header.
///
/// - Not the sorted column: ascending
/// - Sorted ascending: descending
/// - Sorted descending: unsorted
pub fn next_sort(current: Option<&SortState>, column: &str) -> Option<SortState> {
    match current {
        Some(state) if state.column == column => match state.direction {
            SortDirection::Ascending => Some(SortState::descending(column)),
            SortDirection::Descending => None,
        },
        _ => Some(SortState::ascending(column)),
    }
}

/// A table column.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("name", "Name", |c: &Client| c.name.clone()).sortable(),
///     Column::new("seats", "Seats", |b: &Bus| b.seats.to_string())
///         .align(Alignment::Right)
///         .sort_by_key(|b| SortKey::Numeric(b.seats as f64)),
/// ];
/// ```
pub struct Column<T> {
    /// Unique column id.
    pub id: String,
    /// Header text.
    pub header: String,
    /// Fixed width in terminal columns; `None` sizes to content.
    pub width: Option<u16>,
    pub align: Alignment,
    pub sortable: bool,
    cell: CellFn<T>,
    sort_key: Option<SortKeyFn<T>>,
}

impl<T> Column<T> {
    /// Create a column from its cell renderer.
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        cell: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            width: None,
            align: Alignment::Left,
            sortable: false,
            cell: Arc::new(cell),
            sort_key: None,
        }
    }

    /// Set a fixed width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable by its cell text.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Make the column sortable by an extracted key.
    pub fn sort_by_key(mut self, key: impl Fn(&T) -> SortKey + Send + Sync + 'static) -> Self {
        self.sortable = true;
        self.sort_key = Some(Arc::new(key));
        self
    }

    /// Render the cell for `row`.
    pub fn cell(&self, row: &T) -> String {
        (self.cell)(row)
    }

    /// Sort key for `row`.
    pub fn sort_key(&self, row: &T) -> SortKey {
        match &self.sort_key {
            Some(key) => key(row),
            None => SortKey::Text(self.cell(row)),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            width: self.width,
            align: self.align,
            sortable: self.sortable,
            cell: Arc::clone(&self.cell),
            sort_key: self.sort_key.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

/// Stable sort of `indices` (into `rows`) by `column`.
///
/// Keys are extracted once per row. Rows with [`SortKey::None`] stay last in
/// both directions.
pub fn sort_indices<T>(
    rows: &[T],
    indices: &mut Vec<usize>,
    column: &Column<T>,
    direction: SortDirection,
) {
    let mut keyed: Vec<(SortKey, usize)> = indices
        .iter()
        .map(|&i| (column.sort_key(&rows[i]), i))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (SortKey::None, SortKey::None) => Ordering::Equal,
        (SortKey::None, _) => Ordering::Greater,
        (_, SortKey::None) => Ordering::Less,
        _ => match direction {
            SortDirection::Ascending => a.compare(b),
            SortDirection::Descending => b.compare(a),
        },
    });

    *indices = keyed.into_iter().map(|(_, i)| i).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_cycle() {
        let first = next_sort(None, "name");
        assert_eq!(first, Some(SortState::ascending("name")));
        let second = next_sort(first.as_ref(), "name");
        assert_eq!(second, Some(SortState::descending("name")));
        assert_eq!(next_sort(second.as_ref(), "name"), None);
    }

    #[test]
    fn test_other_column_restarts_ascending() {
        let current = SortState::descending("name");
        assert_eq!(
            next_sort(Some(&current), "role"),
            Some(SortState::ascending("role"))
        );
    }

    #[test]
    fn test_missing_keys_stay_last() {
        let rows = vec![None, Some(3.0), Some(1.0)];
        let column = Column::new("n", "N", |r: &Option<f64>| format!("{r:?}"))
            .sort_by_key(|r| r.map(SortKey::Numeric).unwrap_or(SortKey::None));

        let mut asc = vec![0, 1, 2];
        sort_indices(&rows, &mut asc, &column, SortDirection::Ascending);
        assert_eq!(asc, vec![2, 1, 0]);

        let mut desc = vec![0, 1, 2];
        sort_indices(&rows, &mut desc, &column, SortDirection::Descending);
        assert_eq!(desc, vec![1, 2, 0]);
    }
}
