mod common;

use tabview::prelude::*;

use common::{Person, crew, ids, view};

fn with_menu(view: TableView<Person>) -> TableView<Person> {
    view.with_row_actions(RowActions::new(|p: &Person| {
        let mut menu = vec![MenuItem::new("edit", "Edit")];
        if p.role == "driver" {
            menu.push(MenuItem::new("unassign", "Unassign bus"));
        }
        menu.push(MenuItem::new("delete", "Delete").destructive());
        menu
    }))
}

#[test]
fn test_sort_cycle_emits_changes() {
    let mut view = view(crew());
    assert_eq!(
        view.toggle_sort("name").unwrap(),
        Some(SortState::ascending("name"))
    );
    assert_eq!(
        view.toggle_sort("name").unwrap(),
        Some(SortState::descending("name"))
    );
    assert_eq!(view.toggle_sort("name").unwrap(), None);

    assert_eq!(
        view.drain_events(),
        vec![
            TableEvent::SortChange(Some(SortState::ascending("name"))),
            TableEvent::SortChange(Some(SortState::descending("name"))),
            TableEvent::SortChange(None),
        ]
    );
    assert_eq!(ids(&view.filtered_rows())[0], "1");
}

#[test]
fn test_sort_by_other_column_restarts_ascending() {
    let mut view = view(crew());
    view.set_sort(Some(SortState::descending("name"))).unwrap();
    assert_eq!(
        view.toggle_sort("role").unwrap(),
        Some(SortState::ascending("role"))
    );
    let roles: Vec<String> = view.filtered_rows().iter().map(|p| p.role.clone()).collect();
    assert_eq!(roles[0], "dispatcher");
    assert_eq!(roles[9], "owner");
}

#[test]
fn test_equal_sort_keys_keep_data_order() {
    let mut view = view(crew());
    view.set_sort(Some(SortState::ascending("role"))).unwrap();
    let drivers: Vec<String> = view
        .filtered_rows()
        .iter()
        .filter(|p| p.role == "driver")
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(drivers, vec!["1", "3", "6", "8", "10"]);
}

#[test]
fn test_setting_same_sort_is_silent() {
    let mut view = view(crew());
    view.set_sort(Some(SortState::ascending("name"))).unwrap();
    view.drain_events();
    view.set_sort(Some(SortState::ascending("name"))).unwrap();
    assert!(view.drain_events().is_empty());
}

#[test]
fn test_sort_rejects_bad_columns() {
    let mut view = view(crew());
    assert_eq!(
        view.toggle_sort("city"),
        Err(TableError::ColumnNotSortable("city".to_string()))
    );
    assert_eq!(
        view.toggle_sort("seats"),
        Err(TableError::UnknownColumn("seats".to_string()))
    );
    assert!(view.sort().is_none());
    assert!(view.drain_events().is_empty());
}

#[test]
fn test_filter_rejects_unknown_ids_and_values() {
    let mut view = view(crew());
    assert_eq!(
        view.set_filter("depot", "north"),
        Err(TableError::UnknownFilter("depot".to_string()))
    );
    assert_eq!(
        view.set_filter("role", "mechanic"),
        Err(TableError::UnknownFilterOption {
            filter: "role".to_string(),
            value: "mechanic".to_string(),
        })
    );
    assert!(!view.is_filtered());
}

#[test]
fn test_toolbar_buttons_emit_when_shown() {
    let mut hidden = view(crew());
    assert!(!hidden.click_add());
    assert!(!hidden.click_import());
    assert!(hidden.drain_events().is_empty());

    let mut shown = view(crew()).with_add().with_import();
    assert!(shown.click_add());
    assert!(shown.click_import());
    assert_eq!(
        shown.drain_events(),
        vec![TableEvent::Add, TableEvent::Import]
    );
}

#[test]
fn test_row_menu_is_built_per_row() {
    let view = with_menu(view(crew()));
    let driver: Vec<String> = view.row_menu("1").unwrap().into_iter().map(|m| m.id).collect();
    assert_eq!(driver, vec!["edit", "unassign", "delete"]);
    let owner = view.row_menu("2").unwrap();
    assert_eq!(owner.len(), 2);
    assert!(owner[1].destructive);
}

#[test]
fn test_row_action_emits_row() {
    let mut view = with_menu(view(crew()));
    view.activate_row_action("3", "unassign").unwrap();
    match view.drain_events().as_slice() {
        [TableEvent::RowAction { row_id, action, row }] => {
            assert_eq!(row_id, "3");
            assert_eq!(action, "unassign");
            assert_eq!(row.name, "Carla");
        }
        other => panic!("unexpected events {other:?}"),
    }
}

#[test]
fn test_row_action_not_in_menu_is_rejected() {
    let mut view = with_menu(view(crew()));
    assert_eq!(
        view.activate_row_action("2", "unassign"),
        Err(TableError::UnknownRowAction {
            row: "2".to_string(),
            action: "unassign".to_string(),
        })
    );
    assert!(view.drain_events().is_empty());
}

#[test]
fn test_menu_without_actions_is_empty() {
    let view = view(crew());
    assert!(view.row_menu("1").unwrap().is_empty());
    assert!(view.row_menu("x").is_err());
}

#[test]
fn test_instances_are_independent() {
    let mut first = view(crew());
    let second = view(crew());
    assert_ne!(first.id(), second.id());

    first.toggle_row("1").unwrap();
    first.set_filter("role", "owner").unwrap();
    assert_eq!(second.selected_count(), 0);
    assert!(!second.is_filtered());
}
