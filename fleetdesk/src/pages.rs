//! List page definitions: columns, facets, groupings and row menus.

use std::cmp::Ordering;

use chrono::Datelike;
use clap::ValueEnum;
use tabview::prelude::*;

use crate::records::{
    Client, ClientKind, Order, OrderStatus, PaymentStatus, Person, Reservation, ReservationStatus,
    Role,
};

/// The dashboard list pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Page {
    Clients,
    Orders,
    Reservations,
    People,
}

fn money(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

fn numeric(value: Option<f64>) -> SortKey {
    value.map(SortKey::Numeric).unwrap_or(SortKey::None)
}

fn text_or_none(value: Option<&str>) -> SortKey {
    value.map(|v| SortKey::Text(v.to_string())).unwrap_or(SortKey::None)
}

// =============================================================================
// Clients
// =============================================================================

fn client_columns() -> Vec<Column<Client>> {
    vec![
        Column::new("name", "Name", |c: &Client| c.name.clone()).sortable(),
        Column::new("kind", "Type", |c: &Client| c.kind.label().to_string()).sortable(),
        Column::new("email", "Email", |c: &Client| c.email.clone().unwrap_or_default())
            .sort_by_key(|c| text_or_none(c.email.as_deref())),
        Column::new("phone", "Phone", |c: &Client| c.phone.clone().unwrap_or_default()),
        Column::new("city", "City", |c: &Client| c.city.clone().unwrap_or_default())
            .sort_by_key(|c| text_or_none(c.city.as_deref())),
        Column::new("created_on", "Created", |c: &Client| c.created_on.to_string())
            .sortable()
            .align(Alignment::Right),
    ]
}

/// The Clients page.
pub fn clients(config: TableConfig) -> Result<TableView<Client>, TableError> {
    let kind = ClientKind::ALL.into_iter().fold(
        FilterDescriptor::new("kind", "Type", |c: &Client| c.kind.as_str().to_string()),
        |filter, kind| filter.option(kind.label(), kind.as_str()),
    );
    let city = GroupDescriptor::new("city", "City", |c: &Client| {
        c.city.clone().unwrap_or_default()
    });

    Ok(TableView::new(client_columns())
        .with_config(config)?
        .with_row_id(|c: &Client, _| c.id.clone())
        .searchable(
            SearchConfig::new(["name", "email", "phone", "city"])
                .placeholder("Search clients..."),
        )
        .with_filters(vec![kind])
        .with_groups(vec![city])
        .with_row_actions(RowActions::new(|_: &Client| {
            vec![
                MenuItem::new("edit", "Edit"),
                MenuItem::new("orders", "View orders"),
                MenuItem::new("delete", "Delete").destructive(),
            ]
        }))
        .with_add()
        .with_import()
        .with_delete())
}

// =============================================================================
// Orders
// =============================================================================

fn order_columns() -> Vec<Column<Order>> {
    vec![
        Column::new("id", "Order", |o: &Order| o.id.clone()).sortable(),
        Column::new("client", "Client", |o: &Order| o.client.name.clone()).sortable(),
        Column::new("route", "Route", |o: &Order| {
            format!("{} → {}", o.origin, o.destination)
        })
        .width(32),
        Column::new("trip_date", "Trip", |o: &Order| o.trip_date.to_string())
            .sort_by_key(|o| SortKey::Numeric(f64::from(o.trip_date.num_days_from_ce()))),
        Column::new("passengers", "Pax", |o: &Order| o.passengers.to_string())
            .align(Alignment::Right)
            .sort_by_key(|o| SortKey::Numeric(f64::from(o.passengers))),
        Column::new("status", "Status", |o: &Order| o.status.label().to_string())
            .sort_by_key(|o| SortKey::Numeric(f64::from(o.status as u8))),
        Column::new("quote_total", "Quote", |o: &Order| money(o.quote_total))
            .align(Alignment::Right)
            .sort_by_key(|o| numeric(o.quote_total)),
    ]
}

/// Group buckets by lifecycle stage rather than alphabetically.
fn compare_status_labels(a: &str, b: &str) -> Ordering {
    match (OrderStatus::from_label(a), OrderStatus::from_label(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// The Orders page, including leads.
pub fn orders(config: TableConfig) -> Result<TableView<Order>, TableError> {
    let status = OrderStatus::ALL.into_iter().fold(
        FilterDescriptor::new("status", "Status", |o: &Order| o.status.as_str().to_string()),
        |filter, status| filter.option(status.label(), status.as_str()),
    );
    let groups = vec![
        GroupDescriptor::new("status", "Status", |o: &Order| o.status.label().to_string())
            .sort_groups(compare_status_labels),
        GroupDescriptor::new("client", "Client", |o: &Order| o.client.name.clone()),
        GroupDescriptor::new("month", "Trip month", |o: &Order| {
            o.trip_date.format("%Y-%m").to_string()
        }),
    ];

    Ok(TableView::new(order_columns())
        .with_config(config)?
        .with_row_id(|o: &Order, _| o.id.clone())
        .searchable(
            SearchConfig::new(["id", "client.name", "origin", "destination"])
                .placeholder("Search orders..."),
        )
        .with_filters(vec![status])
        .with_groups(groups)
        .with_row_actions(RowActions::new(|o: &Order| {
            let mut menu = vec![MenuItem::new("edit", "Edit")];
            if matches!(o.status, OrderStatus::Lead | OrderStatus::Quoted) {
                menu.push(MenuItem::new("quote", "Request quote"));
                menu.push(MenuItem::new("reserve", "Create reservation"));
            }
            if o.status != OrderStatus::Cancelled {
                menu.push(MenuItem::new("cancel", "Cancel order").destructive());
            }
            menu
        }))
        .with_add()
        .with_delete())
}

// =============================================================================
// Reservations
// =============================================================================

const UNASSIGNED: &str = "Unassigned";

fn driver_name(r: &Reservation) -> String {
    r.driver
        .as_ref()
        .map(|d| d.name.clone())
        .unwrap_or_else(|| UNASSIGNED.to_string())
}

fn unassigned_first(a: &str, b: &str) -> Ordering {
    match (a == UNASSIGNED, b == UNASSIGNED) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.cmp(b),
    }
}

fn reservation_columns() -> Vec<Column<Reservation>> {
    vec![
        Column::new("id", "Reservation", |r: &Reservation| r.id.clone()).sortable(),
        Column::new("departure", "Departure", |r: &Reservation| r.departure.to_string())
            .sortable(),
        Column::new("bus", "Bus", |r: &Reservation| r.bus.plate.clone()).sortable(),
        Column::new("capacity", "Seats", |r: &Reservation| r.bus.capacity.to_string())
            .align(Alignment::Right)
            .sort_by_key(|r| SortKey::Numeric(f64::from(r.bus.capacity))),
        Column::new("driver", "Driver", |r: &Reservation| driver_name(r))
            .sort_by_key(|r| text_or_none(r.driver.as_ref().map(|d| d.name.as_str()))),
        Column::new("status", "Status", |r: &Reservation| r.status.label().to_string())
            .sortable(),
        Column::new("payment", "Payment", |r: &Reservation| {
            r.payment_status.label().to_string()
        })
        .sortable(),
    ]
}

/// The Reservations page.
pub fn reservations(config: TableConfig) -> Result<TableView<Reservation>, TableError> {
    let status = ReservationStatus::ALL.into_iter().fold(
        FilterDescriptor::new("status", "Status", |r: &Reservation| {
            r.status.as_str().to_string()
        }),
        |filter, status| filter.option(status.label(), status.as_str()),
    );
    let payment = PaymentStatus::ALL.into_iter().fold(
        FilterDescriptor::new("payment", "Payment", |r: &Reservation| {
            r.payment_status.as_str().to_string()
        }),
        |filter, payment| filter.option(payment.label(), payment.as_str()),
    );
    let groups = vec![
        GroupDescriptor::new("bus", "Bus", |r: &Reservation| r.bus.plate.clone()),
        GroupDescriptor::new("driver", "Driver", |r: &Reservation| driver_name(r))
            .sort_groups(unassigned_first),
        GroupDescriptor::new("status", "Status", |r: &Reservation| {
            r.status.label().to_string()
        }),
    ];

    Ok(TableView::new(reservation_columns())
        .with_config(config)?
        .with_row_id(|r: &Reservation, _| r.id.clone())
        .searchable(
            SearchConfig::new(["id", "order_id", "bus.plate", "driver.name"])
                .placeholder("Search reservations..."),
        )
        .with_filters(vec![status, payment])
        .with_groups(groups)
        .with_row_actions(RowActions::new(|r: &Reservation| {
            let mut menu = vec![MenuItem::new("edit", "Edit")];
            if r.driver.is_none() {
                menu.push(MenuItem::new("assign", "Assign driver"));
            }
            if r.status == ReservationStatus::Scheduled {
                menu.push(MenuItem::new("cancel", "Cancel reservation").destructive());
            }
            menu
        }))
        .with_add()
        .with_delete())
}

// =============================================================================
// People
// =============================================================================

fn person_columns() -> Vec<Column<Person>> {
    vec![
        Column::new("name", "Name", |p: &Person| p.name.clone()).sortable(),
        Column::new("role", "Role", |p: &Person| p.role.label().to_string()).sortable(),
        Column::new("email", "Email", |p: &Person| p.email.clone().unwrap_or_default()),
        Column::new("phone", "Phone", |p: &Person| p.phone.clone().unwrap_or_default()),
        Column::new("active", "Active", |p: &Person| {
            let active = if p.active { "yes" } else { "no" };
            active.to_string()
        })
        .align(Alignment::Center),
    ]
}

/// The People page: drivers, owners and office staff.
pub fn people(config: TableConfig) -> Result<TableView<Person>, TableError> {
    let role = Role::ALL.into_iter().fold(
        FilterDescriptor::new("role", "Role", |p: &Person| p.role.as_str().to_string()),
        |filter, role| filter.option(role.label(), role.as_str()),
    );
    let active = FilterDescriptor::new("active", "Status", |p: &Person| p.active.to_string())
        .option("Active", "true")
        .option("Inactive", "false")
        .default_value("true");
    let by_role = GroupDescriptor::new("role", "Role", |p: &Person| p.role.label().to_string());

    Ok(TableView::new(person_columns())
        .with_config(config)?
        .with_row_id(|p: &Person, _| p.id.clone())
        .searchable(SearchConfig::new(["name", "email", "phone"]).placeholder("Search people..."))
        .with_filters(vec![role, active])
        .with_groups(vec![by_role])
        .with_row_actions(RowActions::new(|p: &Person| {
            let toggle = if p.active {
                MenuItem::new("deactivate", "Deactivate")
            } else {
                MenuItem::new("activate", "Activate")
            };
            vec![
                MenuItem::new("edit", "Edit"),
                toggle,
                MenuItem::new("delete", "Delete").destructive(),
            ]
        }))
        .with_add()
        .with_delete())
}
