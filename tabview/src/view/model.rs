//! Render model of a table view.
//!
//! A [`TableSnapshot`] is everything a renderer needs for one frame. It
//! borrows the rows from the view and owns the derived text.

use crate::actions::MenuItem;
use crate::column::{Alignment, SortDirection};
use crate::filter::FilterOption;
use crate::row::TableRow;
use crate::selection::HeaderCheckbox;

use super::TableView;

/// Column id of the injected selection column.
pub const SELECT_COLUMN_ID: &str = "__select";
/// Column id of the injected actions column.
pub const ACTIONS_COLUMN_ID: &str = "__actions";

/// The search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    pub placeholder: String,
    /// Text in the box, applied or pending.
    pub text: String,
}

/// One facet dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    pub id: String,
    pub label: String,
    pub options: Vec<FilterOption>,
    pub selected: Option<String>,
}

/// The group-by dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSelector {
    /// `(id, label)` per descriptor.
    pub options: Vec<(String, String)>,
    pub active: Option<String>,
}

/// Controls above the grid. Absent features are `None`, empty or false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    pub search: Option<SearchBox>,
    pub facets: Vec<Facet>,
    pub group_by: Option<GroupSelector>,
    pub add: bool,
    pub import: bool,
    /// Selected row count when the bulk delete action is shown.
    pub delete: Option<usize>,
    /// Search or a facet is active.
    pub can_reset: bool,
}

/// What a header cell is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderKind {
    /// The select-page checkbox.
    Selection(HeaderCheckbox),
    /// A caller column.
    Data {
        sortable: bool,
        sort: Option<SortDirection>,
    },
    /// The row-menu column.
    Actions,
}

/// One header cell, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: String,
    pub label: String,
    pub kind: HeaderKind,
    pub width: Option<u16>,
    pub align: Alignment,
}

/// One rendered row.
#[derive(Debug, Clone)]
pub struct RowView<'a, T> {
    /// Position in the view's data.
    pub index: usize,
    pub id: String,
    pub row: &'a T,
    pub selected: bool,
    /// Rendered caller columns, aligned with the `Data` header cells.
    pub cells: Vec<String>,
    /// Menu items; empty when there is no actions column.
    pub actions: Vec<MenuItem>,
}

/// One bucket with its header label.
#[derive(Debug, Clone)]
pub struct GroupView<'a, T> {
    pub label: String,
    pub rows: Vec<RowView<'a, T>>,
}

/// Why nothing is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    Loading {
        message: String,
    },
    /// No rows matched, or none were supplied; the two are indistinguishable.
    NoResults {
        message: String,
        /// Offer the reset-filters action.
        can_reset: bool,
    },
}

/// The grid body.
#[derive(Debug, Clone)]
pub enum Body<'a, T> {
    Rows(Vec<RowView<'a, T>>),
    Groups(Vec<GroupView<'a, T>>),
    Empty(EmptyState),
}

/// Selection summary and pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub selected: usize,
    /// Rows across all pages.
    pub total: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub can_previous: bool,
    pub can_next: bool,
}

impl Footer {
    /// "X of Y row(s) selected."
    pub fn selection_text(&self) -> String {
        format!("{} of {} row(s) selected.", self.selected, self.total)
    }

    /// "Page N of M", counting an empty table as one page.
    pub fn page_text(&self) -> String {
        format!(
            "Page {} of {}",
            self.page_index + 1,
            self.page_count.max(1)
        )
    }
}

/// Everything needed to draw the table.
#[derive(Debug, Clone)]
pub struct TableSnapshot<'a, T> {
    pub toolbar: Toolbar,
    pub header: Vec<HeaderCell>,
    pub body: Body<'a, T>,
    pub footer: Footer,
    /// Selected row count while the delete confirmation is open.
    pub confirm_delete: Option<usize>,
}

impl<T: TableRow> TableView<T> {
    /// Build the render model of the current state.
    pub fn snapshot(&self) -> TableSnapshot<'_, T> {
        TableSnapshot {
            toolbar: self.toolbar_model(),
            header: self.header_model(),
            body: self.body_model(),
            footer: self.footer_model(),
            confirm_delete: self
                .confirming_delete
                .then(|| self.filtered_selected_count()),
        }
    }

    fn toolbar_model(&self) -> Toolbar {
        Toolbar {
            search: self.search.as_ref().map(|search| SearchBox {
                placeholder: search.placeholder.clone(),
                text: self.draft.text().to_string(),
            }),
            facets: self
                .filters
                .iter()
                .map(|filter| Facet {
                    id: filter.id.clone(),
                    label: filter.label.clone(),
                    options: filter.options.clone(),
                    selected: self.selections.get(&filter.id).map(str::to_string),
                })
                .collect(),
            group_by: (!self.groups.is_empty()).then(|| GroupSelector {
                options: self
                    .groups
                    .iter()
                    .map(|g| (g.id.clone(), g.label.clone()))
                    .collect(),
                active: self.active_group.clone(),
            }),
            add: self.buttons.add,
            import: self.buttons.import,
            delete: self.delete_button(),
            can_reset: self.is_filtered(),
        }
    }

    fn header_model(&self) -> Vec<HeaderCell> {
        let mut header = Vec::with_capacity(self.columns.len() + 2);
        header.push(HeaderCell {
            id: SELECT_COLUMN_ID.to_string(),
            label: String::new(),
            kind: HeaderKind::Selection(self.header_checkbox()),
            width: Some(3),
            align: Alignment::Center,
        });
        header.extend(self.columns.iter().map(|column| HeaderCell {
            id: column.id.clone(),
            label: column.header.clone(),
            kind: HeaderKind::Data {
                sortable: column.sortable,
                sort: self
                    .sort
                    .as_ref()
                    .filter(|s| s.column == column.id)
                    .map(|s| s.direction),
            },
            width: column.width,
            align: column.align,
        }));
        if self.row_actions.is_some() {
            header.push(HeaderCell {
                id: ACTIONS_COLUMN_ID.to_string(),
                label: String::new(),
                kind: HeaderKind::Actions,
                width: Some(3),
                align: Alignment::Center,
            });
        }
        header
    }

    fn row_view(&self, index: usize) -> RowView<'_, T> {
        let row = &self.data[index];
        let id = self.ids[index].clone();
        RowView {
            index,
            selected: self.selection.is_selected(&id),
            id,
            row,
            cells: self.columns.iter().map(|c| c.cell(row)).collect(),
            actions: self
                .row_actions
                .as_ref()
                .map(|actions| actions.menu(row))
                .unwrap_or_default(),
        }
    }

    fn body_model(&self) -> Body<'_, T> {
        let page = self.page_indices();
        if page.is_empty() {
            let empty = if self.loading {
                EmptyState::Loading {
                    message: self.config.loading_message.clone(),
                }
            } else {
                EmptyState::NoResults {
                    message: self.config.empty_message.clone(),
                    can_reset: self.is_filtered(),
                }
            };
            return Body::Empty(empty);
        }

        match self.page_buckets(&page) {
            Some(buckets) => Body::Groups(
                buckets
                    .into_iter()
                    .map(|bucket| GroupView {
                        label: bucket.label,
                        rows: bucket.indices.into_iter().map(|i| self.row_view(i)).collect(),
                    })
                    .collect(),
            ),
            None => Body::Rows(page.into_iter().map(|i| self.row_view(i)).collect()),
        }
    }

    fn delete_button(&self) -> Option<usize> {
        if !self.buttons.delete {
            return None;
        }
        let count = self.filtered_selected_count();
        (count > 0).then_some(count)
    }

    fn footer_model(&self) -> Footer {
        let state = self.pagination();
        Footer {
            selected: self.filtered_selected_count(),
            total: self.total_rows(),
            page_index: state.page_index,
            page_count: self.page_count(),
            page_size: state.page_size,
            page_size_options: self.config.page_size_options.clone(),
            can_previous: self.can_previous_page(),
            can_next: self.can_next_page(),
        }
    }
}
