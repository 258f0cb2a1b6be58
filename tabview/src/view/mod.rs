//! The tabular data view.
//!
//! `TableView<T>` owns the UI state of one table instance: search text,
//! facet selections, active group, sort, pagination and selection. Rows are
//! handed in by the caller and replaced wholesale; everything the caller
//! needs to persist leaves through [`TableEvent`]s.
//!
//! Pipeline, recomputed on every query:
//!
//! 1. filter and search over the full data
//! 2. stable sort of the filtered set
//! 3. internal mode: slice the current page; external mode: keep all rows
//! 4. when grouped: partition the page, keeping sorted order per bucket

pub mod model;

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::{debug, info, warn};

use crate::actions::{MenuItem, RowActions};
use crate::column::{Column, SortState, next_sort, sort_indices};
use crate::config::TableConfig;
use crate::debounce::SearchDraft;
use crate::error::TableError;
use crate::events::{EventQueue, TableEvent};
use crate::filter::{FilterDescriptor, FilterSelections, SearchConfig, filter_indices};
use crate::group::{Bucket, GroupDescriptor, group_indices};
use crate::pagination::{PaginationMode, PaginationState, page_count, page_range};
use crate::row::{RowId, TableRow};
use crate::selection::{HeaderCheckbox, Selection};

pub use model::{
    Body, EmptyState, Facet, Footer, GroupSelector, GroupView, HeaderCell, HeaderKind, RowView,
    SearchBox, TableSnapshot, Toolbar,
};

/// Unique identifier for a TableView instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Which toolbar buttons the caller wired up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ToolbarButtons {
    add: bool,
    import: bool,
    delete: bool,
}

/// A filterable, sortable, groupable, paginated view over caller rows.
///
/// # Example
///
/// ```ignore
/// let mut view = TableView::new(columns)
///     .with_row_id(|p: &Person, _| p.id.clone())
///     .searchable(SearchConfig::new(["name"]))
///     .with_filters(vec![role_filter])
///     .with_delete();
///
/// view.set_data(people);
/// view.type_search("ali", Instant::now());
/// // ...after the debounce...
/// view.tick(Instant::now());
/// for event in view.drain_events() {
///     // persist
/// }
/// ```
#[derive(Debug)]
pub struct TableView<T: TableRow> {
    id: TableId,
    config: TableConfig,

    columns: Vec<Column<T>>,
    row_id: RowId<T>,
    search: Option<SearchConfig>,
    filters: Vec<FilterDescriptor<T>>,
    groups: Vec<GroupDescriptor<T>>,
    row_actions: Option<RowActions<T>>,
    buttons: ToolbarButtons,

    /// Current rows, replaced wholesale by `set_data`.
    data: Vec<T>,
    /// Row ids aligned with `data`.
    ids: Vec<String>,
    loading: bool,

    draft: SearchDraft,
    query: String,
    selections: FilterSelections,
    active_group: Option<String>,
    sort: Option<SortState>,
    pagination: PaginationMode,
    selection: Selection,
    confirming_delete: bool,

    events: EventQueue<T>,
}

impl<T: TableRow> TableView<T> {
    /// Create a view with default config, positional row ids and internal
    /// pagination.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        let config = TableConfig::default();
        Self {
            id: TableId::new(),
            draft: SearchDraft::new(config.search_debounce()),
            pagination: PaginationMode::Internal(PaginationState::new(config.page_size)),
            config,
            columns,
            row_id: RowId::positional(),
            search: None,
            filters: Vec::new(),
            groups: Vec::new(),
            row_actions: None,
            buttons: ToolbarButtons::default(),
            data: Vec::new(),
            ids: Vec::new(),
            loading: false,
            query: String::new(),
            selections: FilterSelections::new(),
            active_group: None,
            sort: None,
            selection: Selection::new(),
            confirming_delete: false,
            events: EventQueue::new(),
        }
    }

    /// Apply a validated config. Resets the page size and debounce delay.
    pub fn with_config(mut self, config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        self.draft = SearchDraft::new(config.search_debounce());
        self.pagination = match self.pagination {
            PaginationMode::Internal(_) => {
                PaginationMode::Internal(PaginationState::new(config.page_size))
            }
            PaginationMode::External { row_count, .. } => PaginationMode::External {
                state: PaginationState::new(config.page_size),
                row_count,
            },
        };
        self.config = config;
        Ok(self)
    }

    /// Derive row ids from the row and its index.
    pub fn with_row_id(
        mut self,
        row_id: impl Fn(&T, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.row_id = RowId::new(row_id);
        self.ids = self.compute_ids();
        self
    }

    /// Enable the search box.
    pub fn searchable(mut self, search: SearchConfig) -> Self {
        self.search = Some(search);
        self
    }

    /// Enable facet dropdowns. Selections start at each facet's default.
    pub fn with_filters(mut self, filters: Vec<FilterDescriptor<T>>) -> Self {
        self.selections = FilterSelections::from_defaults(&filters);
        self.filters = filters;
        self
    }

    /// Enable the group-by selector.
    pub fn with_groups(mut self, groups: Vec<GroupDescriptor<T>>) -> Self {
        self.groups = groups;
        self
    }

    /// Add the actions column with a per-row menu.
    pub fn with_row_actions(mut self, actions: RowActions<T>) -> Self {
        self.row_actions = Some(actions);
        self
    }

    /// Show the Add button.
    pub fn with_add(mut self) -> Self {
        self.buttons.add = true;
        self
    }

    /// Show the Import button.
    pub fn with_import(mut self) -> Self {
        self.buttons.import = true;
        self
    }

    /// Show the bulk delete action when rows are selected.
    pub fn with_delete(mut self) -> Self {
        self.buttons.delete = true;
        self
    }

    /// Switch to caller-driven paging. `data` is then trusted to be exactly
    /// the requested page.
    pub fn with_external_pagination(mut self, state: PaginationState, row_count: usize) -> Self {
        self.set_external_pagination(state, row_count);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// The active config.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The column definitions.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Every row currently held, unfiltered.
    pub fn rows(&self) -> &[T] {
        &self.data
    }

    /// The id of the row at `index` in the current data.
    pub fn row_id_at(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    /// Find a row by id.
    pub fn find_row(&self, id: &str) -> Option<(usize, &T)> {
        let index = self.ids.iter().position(|i| i == id)?;
        Some((index, &self.data[index]))
    }

    /// Check if the caller reported an in-flight load.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // -------------------------------------------------------------------------
    // Row store
    // -------------------------------------------------------------------------

    /// Replace every row.
    ///
    /// Search, facets, sort and grouping are kept. Selected ids that no
    /// longer exist are dropped.
    pub fn set_data(&mut self, rows: Vec<T>) {
        self.data = rows;
        self.ids = self.compute_ids();

        let present: HashSet<&str> = self.ids.iter().map(String::as_str).collect();
        let dropped = self.selection.retain_present(&present);
        if !dropped.is_empty() {
            debug!("{}: dropped {} stale selections", self.id, dropped.len());
        }
        self.close_empty_confirmation();

        if let PaginationMode::Internal(state) = self.pagination {
            let pages = page_count(self.sorted_indices().len(), state.page_size);
            if state.page_index > 0 && state.page_index >= pages {
                let last = pages.saturating_sub(1);
                warn!(
                    "{}: page {} is past the last page after new data, moving to {}",
                    self.id, state.page_index, last
                );
                self.pagination = PaginationMode::Internal(state.at(last));
            }
        }

        debug!("{}: data replaced ({} rows)", self.id, self.data.len());
    }

    /// Flag an in-flight load. Only affects the empty-state variant.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn compute_ids(&self) -> Vec<String> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, row)| self.row_id.id(row, i))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Pipeline
    // -------------------------------------------------------------------------

    /// Indices of rows passing search and facets, in data order.
    fn filtered_indices(&self) -> Vec<usize> {
        filter_indices(
            &self.data,
            &self.query,
            self.search.as_ref(),
            &self.filters,
            &self.selections,
        )
    }

    /// Indices of filtered rows in sorted order.
    fn sorted_indices(&self) -> Vec<usize> {
        let mut indices = self.filtered_indices();
        if let Some(sort) = &self.sort
            && let Some(column) = self.columns.iter().find(|c| c.id == sort.column)
        {
            sort_indices(&self.data, &mut indices, column, sort.direction);
        }
        indices
    }

    fn active_group_descriptor(&self) -> Option<&GroupDescriptor<T>> {
        let id = self.active_group.as_deref()?;
        self.groups.iter().find(|g| g.id == id)
    }

    /// Buckets over every filtered row, when grouped.
    fn filtered_buckets(&self) -> Option<Vec<Bucket>> {
        let descriptor = self.active_group_descriptor()?;
        Some(group_indices(&self.data, &self.sorted_indices(), descriptor))
    }

    /// Filtered indices in display order: sorted, then bucket by bucket when
    /// grouped.
    fn ordered_indices(&self) -> Vec<usize> {
        match self.filtered_buckets() {
            Some(buckets) => buckets.into_iter().flat_map(|b| b.indices).collect(),
            None => self.sorted_indices(),
        }
    }

    /// Indices of the current page, in display order.
    fn page_indices(&self) -> Vec<usize> {
        let ordered = self.ordered_indices();
        match self.pagination {
            PaginationMode::Internal(state) => ordered[page_range(ordered.len(), state)].to_vec(),
            PaginationMode::External { .. } => ordered,
        }
    }

    /// Buckets of the current page, when grouped. The page is a contiguous
    /// run of the grouped order, so regrouping keeps bucket order.
    fn page_buckets(&self, page: &[usize]) -> Option<Vec<Bucket>> {
        self.active_group_descriptor()
            .map(|descriptor| group_indices(&self.data, page, descriptor))
    }

    fn rendered_ids(&self) -> Vec<String> {
        self.page_indices()
            .into_iter()
            .map(|i| self.ids[i].clone())
            .collect()
    }

    fn bucket_rows(&self, buckets: Vec<Bucket>) -> Vec<(String, Vec<&T>)> {
        buckets
            .into_iter()
            .map(|b| {
                let rows = b.indices.iter().map(|&i| &self.data[i]).collect();
                (b.label, rows)
            })
            .collect()
    }

    /// Rows passing search and facets, sorted, across all pages.
    pub fn filtered_rows(&self) -> Vec<&T> {
        self.sorted_indices()
            .into_iter()
            .map(|i| &self.data[i])
            .collect()
    }

    /// Rows on the current page, in display order.
    pub fn visible_rows(&self) -> Vec<&T> {
        self.page_indices()
            .into_iter()
            .map(|i| &self.data[i])
            .collect()
    }

    /// Buckets over every filtered row, or `None` when no group is active.
    pub fn grouped_rows(&self) -> Option<Vec<(String, Vec<&T>)>> {
        self.filtered_buckets().map(|buckets| self.bucket_rows(buckets))
    }

    /// The part of each bucket that falls on the current page.
    pub fn page_groups(&self) -> Option<Vec<(String, Vec<&T>)>> {
        let page = self.page_indices();
        self.page_buckets(&page).map(|buckets| self.bucket_rows(buckets))
    }

    /// Rows across all pages: `row_count` in external mode, filtered count
    /// otherwise.
    pub fn total_rows(&self) -> usize {
        match self.pagination {
            PaginationMode::External { row_count, .. } => row_count,
            PaginationMode::Internal(_) => self.sorted_indices().len(),
        }
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// The search config, if searchable.
    pub fn search_config(&self) -> Option<&SearchConfig> {
        self.search.as_ref()
    }

    /// Text in the search box, applied or not.
    pub fn search_text(&self) -> &str {
        self.draft.text()
    }

    /// The applied search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Record a keystroke in the search box. The text is applied by a later
    /// [`tick`](Self::tick) once the debounce delay has passed without
    /// another keystroke.
    pub fn type_search(&mut self, text: impl Into<String>, now: Instant) {
        self.draft.input(text, now);
    }

    /// Apply pending search text whose debounce has elapsed.
    /// Returns true if the applied query changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.draft.take_if_elapsed(now) {
            Some(text) => self.apply_query(text),
            None => false,
        }
    }

    /// Apply pending search text immediately.
    /// Returns true if the applied query changed.
    pub fn flush_search(&mut self) -> bool {
        match self.draft.flush() {
            Some(text) => self.apply_query(text),
            None => false,
        }
    }

    fn apply_query(&mut self, text: String) -> bool {
        if text == self.query {
            return false;
        }
        debug!("{}: search query '{}'", self.id, text);
        self.query = text;
        self.close_empty_confirmation();
        self.reset_page_index();
        true
    }

    // -------------------------------------------------------------------------
    // Facets
    // -------------------------------------------------------------------------

    /// The facet descriptors.
    pub fn filters(&self) -> &[FilterDescriptor<T>] {
        &self.filters
    }

    /// The active value of a facet.
    pub fn filter_value(&self, id: &str) -> Option<&str> {
        self.selections.get(id)
    }

    /// Select a facet value; an empty value clears the facet.
    /// Returns true if the selection changed.
    pub fn set_filter(&mut self, id: &str, value: &str) -> Result<bool, TableError> {
        let filter = self
            .filters
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| TableError::UnknownFilter(id.to_string()))?;
        if !value.is_empty() && !filter.has_option(value) {
            return Err(TableError::UnknownFilterOption {
                filter: id.to_string(),
                value: value.to_string(),
            });
        }

        let changed = self.selections.set(id, value);
        if changed {
            debug!("{}: filter {} = '{}'", self.id, id, value);
            self.close_empty_confirmation();
            self.reset_page_index();
        }
        Ok(changed)
    }

    /// Clear one facet.
    pub fn clear_filter(&mut self, id: &str) -> Result<bool, TableError> {
        self.set_filter(id, "")
    }

    /// Check if search text or any facet currently constrains the rows.
    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty() || !self.draft.text().is_empty() || !self.selections.is_empty()
    }

    /// Clear the search box and restore every facet to its default.
    pub fn reset_filters(&mut self) {
        self.draft.cancel();
        self.query.clear();
        self.selections = FilterSelections::from_defaults(&self.filters);
        debug!("{}: filters reset", self.id);
        self.close_empty_confirmation();
        self.reset_page_index();
    }

    // -------------------------------------------------------------------------
    // Grouping
    // -------------------------------------------------------------------------

    /// The group descriptors.
    pub fn groups(&self) -> &[GroupDescriptor<T>] {
        &self.groups
    }

    /// The active group id.
    pub fn active_group(&self) -> Option<&str> {
        self.active_group.as_deref()
    }

    /// Group by the descriptor `id`, replacing any active group, or ungroup
    /// with `None`.
    pub fn set_group(&mut self, id: Option<&str>) -> Result<(), TableError> {
        if let Some(id) = id
            && !self.groups.iter().any(|g| g.id == id)
        {
            return Err(TableError::UnknownGroup(id.to_string()));
        }
        self.active_group = id.map(str::to_string);
        debug!("{}: group by {:?}", self.id, self.active_group);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Current sort state.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    fn sortable_column(&self, id: &str) -> Result<&Column<T>, TableError> {
        let column = self
            .columns
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| TableError::UnknownColumn(id.to_string()))?;
        if !column.sortable {
            return Err(TableError::ColumnNotSortable(id.to_string()));
        }
        Ok(column)
    }

    /// Header click: ascending, then descending, then unsorted.
    /// Returns the new sort state.
    pub fn toggle_sort(&mut self, column_id: &str) -> Result<Option<SortState>, TableError> {
        self.sortable_column(column_id)?;
        let next = next_sort(self.sort.as_ref(), column_id);
        self.apply_sort(next.clone());
        Ok(next)
    }

    /// Set or clear the sort directly.
    pub fn set_sort(&mut self, sort: Option<SortState>) -> Result<(), TableError> {
        if let Some(state) = &sort {
            self.sortable_column(&state.column)?;
        }
        self.apply_sort(sort);
        Ok(())
    }

    fn apply_sort(&mut self, sort: Option<SortState>) {
        if self.sort == sort {
            return;
        }
        debug!("{}: sort {:?}", self.id, sort);
        self.sort = sort.clone();
        self.events.push(TableEvent::SortChange(sort));
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Current page state.
    pub fn pagination(&self) -> PaginationState {
        self.pagination.state()
    }

    /// Check if the caller drives paging.
    pub fn is_externally_paginated(&self) -> bool {
        self.pagination.is_external()
    }

    /// Update the caller-driven page after a fetch, switching to external
    /// mode if needed.
    pub fn set_external_pagination(&mut self, state: PaginationState, row_count: usize) {
        self.pagination = PaginationMode::External { state, row_count };
    }

    /// Number of pages across all rows.
    pub fn page_count(&self) -> usize {
        page_count(self.total_rows(), self.pagination().page_size)
    }

    /// Check if a later page exists.
    pub fn can_next_page(&self) -> bool {
        self.pagination().page_index + 1 < self.page_count()
    }

    /// Check if an earlier page exists.
    pub fn can_previous_page(&self) -> bool {
        self.pagination().page_index > 0
    }

    /// Go to the page at `index`. Returns true if a change was made or, in
    /// external mode, requested.
    pub fn go_to_page(&mut self, index: usize) -> bool {
        if index >= self.page_count().max(1) {
            return false;
        }
        let target = self.pagination().at(index);
        self.request_page(target)
    }

    /// Go to the next page.
    pub fn next_page(&mut self) -> bool {
        self.can_next_page() && self.go_to_page(self.pagination().page_index + 1)
    }

    /// Go to the previous page.
    pub fn previous_page(&mut self) -> bool {
        self.can_previous_page() && self.go_to_page(self.pagination().page_index - 1)
    }

    /// Go to the first page.
    pub fn first_page(&mut self) -> bool {
        self.go_to_page(0)
    }

    /// Go to the last page.
    pub fn last_page(&mut self) -> bool {
        let last = self.page_count().saturating_sub(1);
        self.go_to_page(last)
    }

    /// Change the page size. Always returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<bool, TableError> {
        if page_size == 0 {
            return Err(TableError::InvalidConfig("page_size must be at least 1"));
        }
        Ok(self.request_page(PaginationState::new(page_size)))
    }

    fn request_page(&mut self, target: PaginationState) -> bool {
        match &mut self.pagination {
            PaginationMode::Internal(state) => {
                if *state == target {
                    return false;
                }
                debug!("{}: page {:?}", self.id, target);
                *state = target;
                true
            }
            PaginationMode::External { state, .. } => {
                if *state == target {
                    return false;
                }
                info!("{}: requesting page {:?}", self.id, target);
                self.events.push(TableEvent::PaginationChange(target));
                true
            }
        }
    }

    fn reset_page_index(&mut self) {
        let state = self.pagination();
        if state.page_index != 0 {
            self.request_page(state.at(0));
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Check if a row is selected by ID.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// All selected IDs, sorted.
    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.selected()
    }

    /// Number of selected rows, including rows the current filter hides.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Selected indices among rows passing search and facets, in data order.
    fn selected_indices(&self) -> Vec<usize> {
        let mut indices = self.filtered_indices();
        indices.retain(|&i| self.selection.is_selected(&self.ids[i]));
        indices
    }

    /// Number of selected rows that pass search and facets. This is the count
    /// the footer, the delete button and the confirmation show.
    pub fn filtered_selected_count(&self) -> usize {
        self.selected_indices().len()
    }

    /// Selected rows that pass search and facets, in data order. Selected rows
    /// hidden by the current filter are left out.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.selected_indices()
            .into_iter()
            .map(|i| &self.data[i])
            .collect()
    }

    /// Toggle one row's checkbox. Returns true if it is now selected.
    pub fn toggle_row(&mut self, id: &str) -> Result<bool, TableError> {
        if self.find_row(id).is_none() {
            return Err(TableError::UnknownRow(id.to_string()));
        }
        let selected = self.selection.toggle(id);
        self.close_empty_confirmation();
        Ok(selected)
    }

    /// Shift+click: select from the last toggled row to `id`, in rendered
    /// order. Returns the newly selected IDs.
    pub fn range_select(&mut self, id: &str) -> Result<Vec<String>, TableError> {
        if self.find_row(id).is_none() {
            return Err(TableError::UnknownRow(id.to_string()));
        }
        let order = self.rendered_ids();
        Ok(self.selection.range_select(id, &order))
    }

    /// Header checkbox: select every row on the rendered page, or deselect
    /// them when all are already selected. Rows on other pages are untouched.
    pub fn toggle_page_selection(&mut self) {
        let visible = self.rendered_ids();
        self.selection.toggle_all(&visible);
        self.close_empty_confirmation();
    }

    /// Header checkbox state for the rendered page.
    pub fn header_checkbox(&self) -> HeaderCheckbox {
        self.selection.checkbox_state(&self.rendered_ids())
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.confirming_delete = false;
    }

    // -------------------------------------------------------------------------
    // Bulk delete
    // -------------------------------------------------------------------------

    /// Open the delete confirmation. Needs the delete action enabled and at
    /// least one selected row passing the current filter. Returns true if the
    /// confirmation is open.
    pub fn request_delete(&mut self) -> bool {
        if !self.buttons.delete || self.filtered_selected_count() == 0 {
            return false;
        }
        self.confirming_delete = true;
        true
    }

    /// Check if the delete confirmation is open.
    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    /// The confirmation never stays open over zero deletable rows.
    fn close_empty_confirmation(&mut self) {
        if self.confirming_delete && self.filtered_selected_count() == 0 {
            debug!("{}: nothing left to delete, closing confirmation", self.id);
            self.confirming_delete = false;
        }
    }

    /// Close the confirmation without deleting.
    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    /// Confirm the delete: emits [`TableEvent::DeleteSelected`] with
    /// [`selected_rows`](Self::selected_rows) and clears the whole selection,
    /// hidden rows included. Rows stay in the view until the
    /// caller supplies data without them.
    ///
    /// Returns the number of rows handed to the caller, or `None` when no
    /// confirmation was open.
    pub fn confirm_delete(&mut self) -> Option<usize> {
        if !self.confirming_delete {
            return None;
        }
        self.confirming_delete = false;
        let rows: Vec<T> = self.selected_rows().into_iter().cloned().collect();
        let count = rows.len();
        info!("{}: delete confirmed for {} rows", self.id, count);
        self.events.push(TableEvent::DeleteSelected(rows));
        self.selection.clear();
        Some(count)
    }

    // -------------------------------------------------------------------------
    // Toolbar and row actions
    // -------------------------------------------------------------------------

    /// Click Add. Returns false if the button isn't shown.
    pub fn click_add(&mut self) -> bool {
        if self.buttons.add {
            self.events.push(TableEvent::Add);
        }
        self.buttons.add
    }

    /// Click Import. Returns false if the button isn't shown.
    pub fn click_import(&mut self) -> bool {
        if self.buttons.import {
            self.events.push(TableEvent::Import);
        }
        self.buttons.import
    }

    /// The action menu for a row. Empty when no actions are configured.
    pub fn row_menu(&self, id: &str) -> Result<Vec<MenuItem>, TableError> {
        let (_, row) = self
            .find_row(id)
            .ok_or_else(|| TableError::UnknownRow(id.to_string()))?;
        Ok(self
            .row_actions
            .as_ref()
            .map(|actions| actions.menu(row))
            .unwrap_or_default())
    }

    /// Activate an item of a row's menu.
    pub fn activate_row_action(&mut self, id: &str, action: &str) -> Result<(), TableError> {
        let menu = self.row_menu(id)?;
        if !menu.iter().any(|item| item.id == action) {
            return Err(TableError::UnknownRowAction {
                row: id.to_string(),
                action: action.to_string(),
            });
        }
        let row = self
            .find_row(id)
            .map(|(_, row)| row.clone())
            .ok_or_else(|| TableError::UnknownRow(id.to_string()))?;
        debug!("{}: row action {} on {}", self.id, action, id);
        self.events.push(TableEvent::RowAction {
            row_id: id.to_string(),
            action: action.to_string(),
            row,
        });
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Take every pending event, oldest first.
    pub fn drain_events(&mut self) -> Vec<TableEvent<T>> {
        self.events.drain()
    }
}
