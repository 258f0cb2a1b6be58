mod common;

use tabview::prelude::*;

use common::{Person, crew, ids, person, view};

#[test]
fn test_toggle_row_by_id() {
    let mut view = view(crew());
    assert!(view.toggle_row("3").unwrap());
    assert!(view.is_selected("3"));
    assert!(!view.toggle_row("3").unwrap());
    assert_eq!(view.selected_count(), 0);
}

#[test]
fn test_toggle_unknown_row_is_rejected() {
    let mut view = view(crew());
    assert_eq!(
        view.toggle_row("99"),
        Err(TableError::UnknownRow("99".to_string()))
    );
}

#[test]
fn test_select_page_only_touches_rendered_rows() {
    let mut view = view(crew());
    view.set_page_size(4).unwrap();
    view.go_to_page(1);

    view.toggle_page_selection();
    assert_eq!(view.selected_ids(), vec!["5", "6", "7", "8"]);
    assert_eq!(view.header_checkbox(), HeaderCheckbox::Checked);

    view.go_to_page(0);
    assert_eq!(view.header_checkbox(), HeaderCheckbox::Unchecked);

    view.toggle_row("1").unwrap();
    assert_eq!(view.header_checkbox(), HeaderCheckbox::Indeterminate);

    // Partially selected page: the header selects the rest.
    view.toggle_page_selection();
    assert_eq!(view.selected_count(), 8);

    // Fully selected page: the header clears this page only.
    view.toggle_page_selection();
    assert_eq!(view.selected_ids(), vec!["5", "6", "7", "8"]);
}

#[test]
fn test_select_page_respects_filters() {
    let mut view = view(crew());
    view.set_filter("role", "owner").unwrap();
    view.toggle_page_selection();
    assert_eq!(view.selected_ids(), vec!["2", "5", "9"]);
}

#[test]
fn test_selection_survives_sort_and_filter() {
    let mut view = view(crew());
    view.toggle_row("2").unwrap();
    view.toggle_sort("name").unwrap();
    view.set_filter("role", "driver").unwrap();
    assert!(view.is_selected("2"));
    view.clear_filter("role").unwrap();
    assert_eq!(view.selected_ids(), vec!["2"]);
}

#[test]
fn test_range_select_uses_rendered_order() {
    let mut view = view(crew());
    view.set_sort(Some(SortState::descending("name"))).unwrap();
    // Rendered: 10 9 8 7 6 5 4 3 2 1
    view.toggle_row("8").unwrap();
    let added = view.range_select("5").unwrap();
    assert_eq!(added.len(), 3);
    assert_eq!(view.selected_ids(), vec!["5", "6", "7", "8"]);
}

#[test]
fn test_range_select_follows_group_order() {
    let mut view = view(crew());
    view.set_group(Some("role")).unwrap();
    // Rendered: dispatcher 4 7 | driver 1 3 6 8 10 | owner 2 5 9
    view.toggle_row("7").unwrap();
    view.range_select("3").unwrap();
    assert_eq!(view.selected_ids(), vec!["1", "3", "7"]);
}

#[test]
fn test_stale_ids_dropped_on_new_data() {
    let mut view = view(crew());
    view.toggle_row("1").unwrap();
    view.toggle_row("2").unwrap();

    let without_bob: Vec<Person> = crew().into_iter().filter(|p| p.id != "2").collect();
    view.set_data(without_bob);
    assert_eq!(view.selected_ids(), vec!["1"]);
}

#[test]
fn test_positional_ids_fall_back_to_index() {
    let mut view = TableView::new(common::columns());
    view.set_data(vec![person("a", "Ana", "owner"), person("b", "Ben", "owner")]);
    assert_eq!(view.row_id_at(1), Some("1"));
    view.toggle_row("1").unwrap();
    assert_eq!(ids(&view.selected_rows()), vec!["b"]);
}

#[test]
fn test_confirmed_delete_emits_rows_and_clears_selection() {
    let mut view = view(crew());
    view.toggle_row("4").unwrap();
    view.toggle_row("2").unwrap();

    assert!(view.request_delete());
    assert!(view.is_confirming_delete());
    assert_eq!(view.confirm_delete(), Some(2));
    assert_eq!(view.selected_count(), 0);
    assert!(!view.is_confirming_delete());

    let events = view.drain_events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        TableEvent::DeleteSelected(rows) => {
            let deleted: Vec<&str> = rows.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(deleted, vec!["2", "4"]);
        }
        other => panic!("unexpected event {other:?}"),
    }

    // No optimistic removal.
    assert_eq!(view.rows().len(), 10);
}

#[test]
fn test_cancelled_delete_keeps_selection() {
    let mut view = view(crew());
    view.toggle_row("4").unwrap();
    assert!(view.request_delete());
    view.cancel_delete();
    assert_eq!(view.confirm_delete(), None);
    assert_eq!(view.selected_ids(), vec!["4"]);
    assert!(view.drain_events().is_empty());
}

#[test]
fn test_delete_needs_selection_and_action() {
    let mut with_delete = view(crew());
    assert!(!with_delete.request_delete());

    let mut without_delete = TableView::new(common::columns());
    without_delete.set_data(crew());
    without_delete.toggle_row("0").unwrap();
    assert!(!without_delete.request_delete());
}

#[test]
fn test_confirmation_closes_when_selection_vanishes() {
    let mut view = view(crew());
    view.toggle_row("4").unwrap();
    view.request_delete();

    let without_dmitri: Vec<Person> = crew().into_iter().filter(|p| p.id != "4").collect();
    view.set_data(without_dmitri);
    assert!(!view.is_confirming_delete());
    assert_eq!(view.confirm_delete(), None);
}

#[test]
fn test_confirmation_closes_when_rows_are_deselected() {
    let mut view = view(crew());
    view.toggle_row("4").unwrap();
    assert!(view.request_delete());
    view.toggle_row("4").unwrap();

    assert!(!view.is_confirming_delete());
    assert_eq!(view.snapshot().confirm_delete, None);
    assert_eq!(view.confirm_delete(), None);
    assert!(view.drain_events().is_empty());

    view.toggle_page_selection();
    assert!(view.request_delete());
    view.toggle_page_selection();
    assert!(!view.is_confirming_delete());
}

#[test]
fn test_confirmation_closes_when_filter_hides_selection() {
    let mut view = view(crew());
    view.toggle_row("4").unwrap();
    assert!(view.request_delete());

    view.set_filter("role", "owner").unwrap();
    assert!(!view.is_confirming_delete());
    assert!(!view.request_delete());
    assert!(view.is_selected("4"));
}

#[test]
fn test_delete_hands_over_only_filtered_selection() {
    let mut view = view(crew());
    view.toggle_page_selection();
    view.set_filter("role", "owner").unwrap();

    assert!(view.request_delete());
    assert_eq!(view.snapshot().confirm_delete, Some(3));
    assert_eq!(view.confirm_delete(), Some(3));
    assert_eq!(view.selected_count(), 0);

    match view.drain_events().as_slice() {
        [TableEvent::DeleteSelected(rows)] => {
            let deleted: Vec<&str> = rows.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(deleted, vec!["2", "5", "9"]);
        }
        other => panic!("unexpected events {other:?}"),
    }
}
