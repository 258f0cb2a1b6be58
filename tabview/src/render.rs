//! Plain-text rendering of a [`TableSnapshot`].
//!
//! Widths are measured in terminal columns, so wide glyphs line up. Cells
//! wider than a fixed column width are cut with `…`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::column::{Alignment, SortDirection};
use crate::selection::HeaderCheckbox;
use crate::view::{Body, EmptyState, HeaderCell, HeaderKind, RowView, TableSnapshot, Toolbar};

const COLUMN_GAP: &str = "  ";
const ELLIPSIS: char = '…';

/// Fit `text` into exactly `width` terminal columns.
pub fn fit(text: &str, width: usize, align: Alignment) -> String {
    let text = truncate(text, width);
    let pad = width.saturating_sub(text.width());
    match align {
        Alignment::Left => format!("{text}{}", " ".repeat(pad)),
        Alignment::Right => format!("{}{text}", " ".repeat(pad)),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
        }
    }
}

/// Cut `text` to at most `width` columns, ending in `…` when shortened.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

fn checkbox(state: HeaderCheckbox) -> &'static str {
    match state {
        HeaderCheckbox::Unchecked => "[ ]",
        HeaderCheckbox::Indeterminate => "[-]",
        HeaderCheckbox::Checked => "[x]",
    }
}

fn header_text(cell: &HeaderCell) -> String {
    match &cell.kind {
        HeaderKind::Selection(state) => checkbox(*state).to_string(),
        HeaderKind::Data { sort, .. } => match sort {
            Some(SortDirection::Ascending) => format!("{} ▲", cell.label),
            Some(SortDirection::Descending) => format!("{} ▼", cell.label),
            None => cell.label.clone(),
        },
        HeaderKind::Actions => String::new(),
    }
}

/// Text of every header cell for one row, in header order.
fn row_texts<T>(header: &[HeaderCell], row: &RowView<'_, T>) -> Vec<String> {
    let mut cells = row.cells.iter();
    header
        .iter()
        .map(|cell| match cell.kind {
            HeaderKind::Selection(_) => {
                let mark = if row.selected { "[x]" } else { "[ ]" };
                mark.to_string()
            }
            HeaderKind::Data { .. } => cells.next().cloned().unwrap_or_default(),
            HeaderKind::Actions => {
                let mark = if row.actions.is_empty() { "" } else { "..." };
                mark.to_string()
            }
        })
        .collect()
}

fn toolbar_line(toolbar: &Toolbar) -> String {
    let mut parts = Vec::new();
    if let Some(search) = &toolbar.search {
        let text = if search.text.is_empty() {
            &search.placeholder
        } else {
            &search.text
        };
        parts.push(format!("[{text}]"));
    }
    for facet in &toolbar.facets {
        let selected = facet
            .selected
            .as_deref()
            .and_then(|value| facet.options.iter().find(|o| o.value == value))
            .map(|o| o.label.as_str())
            .unwrap_or("All");
        parts.push(format!("{}: {selected}", facet.label));
    }
    if let Some(group_by) = &toolbar.group_by {
        let active = group_by
            .active
            .as_deref()
            .and_then(|id| group_by.options.iter().find(|(gid, _)| gid == id))
            .map(|(_, label)| label.as_str())
            .unwrap_or("None");
        parts.push(format!("Group by: {active}"));
    }
    if toolbar.can_reset {
        parts.push("(Reset)".to_string());
    }
    if let Some(count) = toolbar.delete {
        parts.push(format!("[Delete ({count})]"));
    }
    if toolbar.import {
        parts.push("[Import]".to_string());
    }
    if toolbar.add {
        parts.push("[Add]".to_string());
    }
    parts.join(COLUMN_GAP)
}

fn join_cells(texts: &[String], widths: &[usize], header: &[HeaderCell]) -> String {
    let line: Vec<String> = texts
        .iter()
        .zip(widths)
        .zip(header)
        .map(|((text, &width), cell)| fit(text, width, cell.align))
        .collect();
    line.join(COLUMN_GAP).trim_end().to_string()
}

/// Lay out a snapshot as a terminal table.
pub fn render_text<T>(snapshot: &TableSnapshot<'_, T>) -> String {
    let header = &snapshot.header;
    let header_texts: Vec<String> = header.iter().map(header_text).collect();

    let rows: Vec<Vec<String>> = match &snapshot.body {
        Body::Rows(rows) => rows.iter().map(|r| row_texts(header, r)).collect(),
        Body::Groups(groups) => groups
            .iter()
            .flat_map(|g| g.rows.iter().map(|r| row_texts(header, r)))
            .collect(),
        Body::Empty(_) => Vec::new(),
    };

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell.width {
            Some(width) => usize::from(width),
            None => rows
                .iter()
                .map(|r| r[i].width())
                .chain(std::iter::once(header_texts[i].width()))
                .max()
                .unwrap_or(0),
        })
        .collect();
    let total_width =
        widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);

    let mut out = Vec::new();
    let toolbar = toolbar_line(&snapshot.toolbar);
    if !toolbar.is_empty() {
        out.push(toolbar);
    }
    out.push(join_cells(&header_texts, &widths, header));
    out.push("─".repeat(total_width));

    match &snapshot.body {
        Body::Rows(_) => {
            out.extend(rows.iter().map(|r| join_cells(r, &widths, header)));
        }
        Body::Groups(groups) => {
            let mut rendered = rows.iter();
            for group in groups {
                let label = if group.label.is_empty() {
                    "(none)"
                } else {
                    group.label.as_str()
                };
                out.push(format!("▸ {label} ({})", group.rows.len()));
                for texts in rendered.by_ref().take(group.rows.len()) {
                    out.push(join_cells(texts, &widths, header));
                }
            }
        }
        Body::Empty(EmptyState::Loading { message }) => out.push(message.clone()),
        Body::Empty(EmptyState::NoResults { message, can_reset }) => {
            out.push(message.clone());
            if *can_reset {
                out.push("Reset filters to show all rows.".to_string());
            }
        }
    }

    out.push("─".repeat(total_width));
    let footer = &snapshot.footer;
    out.push(format!(
        "{}{COLUMN_GAP}{}{COLUMN_GAP}Rows per page: {}",
        footer.selection_text(),
        footer.page_text(),
        footer.page_size
    ));

    if let Some(count) = snapshot.confirm_delete {
        out.push(format!(
            "Delete {count} selected row(s)? This action cannot be undone."
        ));
    }

    out.join("\n")
}
