//! Fleet dashboard records as returned by the backend list endpoints.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabview::{TableRow, json_field};

/// A record with a backend id.
pub trait Record: TableRow + fmt::Debug {
    fn record_id(&self) -> &str;
}

macro_rules! record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TableRow for $ty {
                fn field(&self, path: &str) -> Option<String> {
                    json_field(self, path)
                }
            }

            impl Record for $ty {
                fn record_id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

// =============================================================================
// Enumerations
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientKind {
    Individual,
    Company,
    School,
}

impl ClientKind {
    pub const ALL: [ClientKind; 3] = [Self::Individual, Self::Company, Self::School];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Company => "company",
            Self::School => "school",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Company => "Company",
            Self::School => "School",
        }
    }
}

/// Order lifecycle. A lead becomes an order once quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Lead,
    Quoted,
    Confirmed,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        Self::Lead,
        Self::Quoted,
        Self::Confirmed,
        Self::Completed,
        Self::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Quoted => "quoted",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Lead => "Lead",
            Self::Quoted => "Quoted",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 4] = [
        Self::Scheduled,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Partial,
    Paid,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [Self::Unpaid, Self::Partial, Self::Paid];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Partial => "partial",
            Self::Paid => "paid",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unpaid => "Unpaid",
            Self::Partial => "Partially paid",
            Self::Paid => "Paid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Driver,
    Owner,
    Dispatcher,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Self::Driver, Self::Owner, Self::Dispatcher, Self::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Driver => "driver",
            Self::Owner => "owner",
            Self::Dispatcher => "dispatcher",
            Self::Admin => "admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Driver => "Driver",
            Self::Owner => "Owner",
            Self::Dispatcher => "Dispatcher",
            Self::Admin => "Admin",
        }
    }
}

// =============================================================================
// Records
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub kind: ClientKind,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    pub created_on: NaiveDate,
}

/// The client summary embedded in orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub client: ClientRef,
    pub status: OrderStatus,
    pub origin: String,
    pub destination: String,
    pub trip_date: NaiveDate,
    pub passengers: u32,
    /// Set once the backend quoted the trip.
    #[serde(default)]
    pub quote_total: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bus {
    pub plate: String,
    pub capacity: u32,
}

/// The staff summary embedded in reservations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub order_id: String,
    pub bus: Bus,
    #[serde(default)]
    pub driver: Option<StaffRef>,
    pub status: ReservationStatus,
    pub departure: NaiveDate,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

record!(Client, Order, Reservation, Person);
