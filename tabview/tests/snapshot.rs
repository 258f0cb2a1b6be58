mod common;

use tabview::prelude::*;
use tabview::view::{HeaderKind, model::SELECT_COLUMN_ID};

use common::{Person, crew, view};

#[test]
fn test_header_wraps_caller_columns() {
    let view = view(crew()).with_row_actions(RowActions::new(|_: &Person| {
        vec![MenuItem::new("edit", "Edit")]
    }));
    let snapshot = view.snapshot();
    let header_ids: Vec<&str> = snapshot.header.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(header_ids, vec![SELECT_COLUMN_ID, "name", "role", "city", "__actions"]);
    assert_eq!(
        snapshot.header[0].kind,
        HeaderKind::Selection(HeaderCheckbox::Unchecked)
    );
    assert_eq!(snapshot.header[4].kind, HeaderKind::Actions);
}

#[test]
fn test_no_actions_column_without_menu() {
    let view = view(crew());
    let snapshot = view.snapshot();
    assert_eq!(snapshot.header.len(), 4);
    match &snapshot.body {
        Body::Rows(rows) => assert!(rows.iter().all(|r| r.actions.is_empty())),
        other => panic!("unexpected body {other:?}"),
    }
}

#[test]
fn test_sort_indicator_in_header() {
    let mut view = view(crew());
    view.toggle_sort("role").unwrap();
    let snapshot = view.snapshot();
    assert_eq!(
        snapshot.header[2].kind,
        HeaderKind::Data {
            sortable: true,
            sort: Some(SortDirection::Ascending),
        }
    );
    assert_eq!(
        snapshot.header[3].kind,
        HeaderKind::Data {
            sortable: false,
            sort: None,
        }
    );
}

#[test]
fn test_toolbar_reflects_configuration() {
    let mut view = view(crew()).with_add();
    let toolbar = view.snapshot().toolbar;
    assert_eq!(
        toolbar.search.as_ref().map(|s| s.placeholder.as_str()),
        Some("Search...")
    );
    assert_eq!(toolbar.facets.len(), 2);
    assert!(toolbar.group_by.is_some());
    assert!(toolbar.add);
    assert!(!toolbar.import);
    assert_eq!(toolbar.delete, None);
    assert!(!toolbar.can_reset);

    view.toggle_row("1").unwrap();
    view.set_filter("role", "driver").unwrap();
    let toolbar = view.snapshot().toolbar;
    assert_eq!(toolbar.delete, Some(1));
    assert!(toolbar.can_reset);
    assert_eq!(toolbar.facets[0].selected.as_deref(), Some("driver"));
}

#[test]
fn test_bare_table_has_empty_toolbar() {
    let mut view = TableView::new(common::columns());
    view.set_data(crew());
    let snapshot = view.snapshot();
    assert!(snapshot.toolbar.search.is_none());
    assert!(snapshot.toolbar.facets.is_empty());
    assert!(snapshot.toolbar.group_by.is_none());
    assert_eq!(snapshot.toolbar.delete, None);
}

#[test]
fn test_loading_empty_state() {
    let mut view = view(Vec::new());
    view.set_loading(true);
    match view.snapshot().body {
        Body::Empty(EmptyState::Loading { message }) => assert_eq!(message, "Loading..."),
        other => panic!("unexpected body {other:?}"),
    }

    // Loading with rows on screen shows the rows.
    view.set_data(crew());
    assert!(matches!(view.snapshot().body, Body::Rows(_)));
}

#[test]
fn test_no_results_offers_reset_when_filtered() {
    let mut view = view(Vec::new());
    match view.snapshot().body {
        Body::Empty(EmptyState::NoResults { can_reset, .. }) => assert!(!can_reset),
        other => panic!("unexpected body {other:?}"),
    }

    view.set_data(crew());
    view.type_search("zzz", std::time::Instant::now());
    view.flush_search();
    match view.snapshot().body {
        Body::Empty(EmptyState::NoResults { message, can_reset }) => {
            assert_eq!(message, "No results found.");
            assert!(can_reset);
        }
        other => panic!("unexpected body {other:?}"),
    }
}

#[test]
fn test_footer_counts() {
    let mut view = view(crew());
    view.set_page_size(4).unwrap();
    view.toggle_row("2").unwrap();
    view.toggle_row("9").unwrap();

    let footer = view.snapshot().footer;
    assert_eq!(footer.selection_text(), "2 of 10 row(s) selected.");
    assert_eq!(footer.page_text(), "Page 1 of 3");
    assert!(footer.can_next);
    assert!(!footer.can_previous);
    assert_eq!(footer.page_size_options, vec![10, 20, 30, 40, 50]);
}

#[test]
fn test_footer_counts_selection_under_filter() {
    let mut view = view(crew());
    view.toggle_page_selection();
    view.set_filter("role", "owner").unwrap();

    let snapshot = view.snapshot();
    assert_eq!(snapshot.footer.selection_text(), "3 of 3 row(s) selected.");
    assert_eq!(snapshot.toolbar.delete, Some(3));
    assert_eq!(view.selected_count(), 10);

    view.clear_filter("role").unwrap();
    assert_eq!(view.snapshot().footer.selection_text(), "10 of 10 row(s) selected.");
}

#[test]
fn test_empty_footer_counts_one_page() {
    let view = view(Vec::new());
    assert_eq!(view.snapshot().footer.page_text(), "Page 1 of 1");
}

#[test]
fn test_grouped_body() {
    let mut view = view(crew());
    view.set_group(Some("role")).unwrap();
    match view.snapshot().body {
        Body::Groups(groups) => {
            let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
            assert_eq!(labels, vec!["dispatcher", "driver", "owner"]);
            assert_eq!(groups[1].rows.len(), 5);
            assert_eq!(groups[1].rows[0].cells, vec!["Alice", "driver", "Lisbon"]);
        }
        other => panic!("unexpected body {other:?}"),
    }
}

#[test]
fn test_render_text_layout() {
    let mut view = view(crew()).with_add();
    view.set_page_size(2).unwrap();
    view.toggle_row("2").unwrap();
    let text = render_text(&view.snapshot());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "[Search...]  Role: All  City: All  Group by: None  [Delete (1)]  [Add]"
    );
    assert_eq!(lines[1], "[-]  Name   Role    City");
    assert_eq!(lines[3], "[ ]  Alice  driver  Lisbon");
    assert_eq!(lines[4], "[x]  Bob    owner");
    assert_eq!(
        lines[6],
        "1 of 10 row(s) selected.  Page 1 of 5  Rows per page: 2"
    );
}

#[test]
fn test_render_text_groups_and_confirmation() {
    let mut view = view(crew());
    view.set_filter("role", "owner").unwrap();
    view.set_group(Some("role")).unwrap();
    view.toggle_page_selection();
    view.request_delete();

    let text = render_text(&view.snapshot());
    assert!(text.contains("▸ owner (3)"));
    assert!(text.contains("[x]  Eve"));
    assert!(text.ends_with("Delete 3 selected row(s)? This action cannot be undone."));
}

#[test]
fn test_render_text_truncates_fixed_width() {
    let columns = vec![Column::new("name", "Name", |p: &Person| p.name.clone()).width(4)];
    let mut view = TableView::new(columns);
    view.set_data(vec![common::person("1", "Dmitri", "dispatcher")]);
    let text = render_text(&view.snapshot());
    assert!(text.contains("[ ]  Dmi…"));
}
