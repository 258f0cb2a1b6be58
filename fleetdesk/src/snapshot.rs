//! Snapshot files: a saved response of every list endpoint.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::FleetError;
use crate::records::{Client, Order, Person, Reservation};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub clients: Vec<Client>,
    pub orders: Vec<Order>,
    pub reservations: Vec<Reservation>,
    pub people: Vec<Person>,
}

impl Snapshot {
    /// Read a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, FleetError> {
        let json = fs::read_to_string(path).map_err(FleetError::io(path))?;
        let snapshot: Snapshot = serde_json::from_str(&json).map_err(FleetError::json(path))?;
        info!(
            "Loaded snapshot {}: {} clients, {} orders, {} reservations, {} people",
            path.display(),
            snapshot.clients.len(),
            snapshot.orders.len(),
            snapshot.reservations.len(),
            snapshot.people.len()
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::OrderStatus;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{
                "orders": [{
                    "id": "O-1",
                    "client": { "id": "C-1", "name": "Acme Tours" },
                    "status": "quoted",
                    "origin": "Lisbon",
                    "destination": "Faro",
                    "trip_date": "2026-07-14",
                    "passengers": 48,
                    "quote_total": 1840.5
                }]
            }"#,
        )
        .unwrap();
        assert!(snapshot.clients.is_empty());
        assert_eq!(snapshot.orders.len(), 1);
        assert_eq!(snapshot.orders[0].status, OrderStatus::Quoted);
        assert_eq!(snapshot.orders[0].quote_total, Some(1840.5));
    }
}
