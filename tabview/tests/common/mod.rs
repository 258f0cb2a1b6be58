//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use serde::Serialize;
use tabview::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: String,
    pub address: Option<Address>,
}

impl TableRow for Person {
    fn field(&self, path: &str) -> Option<String> {
        json_field(self, path)
    }
}

pub fn person(id: &str, name: &str, role: &str) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        address: None,
    }
}

pub fn living_in(mut person: Person, city: &str) -> Person {
    person.address = Some(Address {
        city: city.to_string(),
    });
    person
}

/// Alice (driver) and Bob (owner).
pub fn alice_and_bob() -> Vec<Person> {
    vec![person("1", "Alice", "driver"), person("2", "Bob", "owner")]
}

/// Ten people across three roles.
pub fn crew() -> Vec<Person> {
    vec![
        living_in(person("1", "Alice", "driver"), "Lisbon"),
        person("2", "Bob", "owner"),
        living_in(person("3", "Carla", "driver"), "Porto"),
        person("4", "Dmitri", "dispatcher"),
        living_in(person("5", "Eve", "owner"), "Lisbon"),
        person("6", "Farid", "driver"),
        person("7", "Gus", "dispatcher"),
        living_in(person("8", "Hana", "driver"), "Braga"),
        person("9", "Ivo", "owner"),
        person("10", "Jun", "driver"),
    ]
}

pub fn ids(rows: &[&Person]) -> Vec<String> {
    rows.iter().map(|p| p.id.clone()).collect()
}

pub fn columns() -> Vec<Column<Person>> {
    vec![
        Column::new("name", "Name", |p: &Person| p.name.clone()).sortable(),
        Column::new("role", "Role", |p: &Person| p.role.clone()).sortable(),
        Column::new("city", "City", |p: &Person| {
            p.address.as_ref().map(|a| a.city.clone()).unwrap_or_default()
        }),
    ]
}

pub fn role_filter() -> FilterDescriptor<Person> {
    FilterDescriptor::new("role", "Role", |p: &Person| p.role.clone())
        .option("Driver", "driver")
        .option("Owner", "owner")
        .option("Dispatcher", "dispatcher")
}

pub fn city_filter() -> FilterDescriptor<Person> {
    FilterDescriptor::new("city", "City", |p: &Person| {
        p.address.as_ref().map(|a| a.city.clone()).unwrap_or_default()
    })
    .option("Lisbon", "Lisbon")
    .option("Porto", "Porto")
    .option("Braga", "Braga")
}

pub fn role_group() -> GroupDescriptor<Person> {
    GroupDescriptor::new("role", "Role", |p: &Person| p.role.clone())
}

/// A view over `rows` keyed by person id, searchable by name and city.
pub fn view(rows: Vec<Person>) -> TableView<Person> {
    let mut view = TableView::new(columns())
        .with_row_id(|p: &Person, _| p.id.clone())
        .searchable(SearchConfig::new(["name", "address.city"]))
        .with_filters(vec![role_filter(), city_filter()])
        .with_groups(vec![role_group()])
        .with_delete();
    view.set_data(rows);
    view
}
