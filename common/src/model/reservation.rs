use serde::{Deserialize, Serialize};

use super::{cell, id_text};
use super::ticket::TicketStatus;
use crate::api::Resource;
use crate::panel::{Entity, Field, FieldKind, Lookup, Lookups};

/// Read projection joining a ticket with its passenger and flight
/// (`GET /reservations`). Reservations are tickets, so writes go to
/// `/tickets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reservation {
    pub id: i64,
    pub ucus_id: Option<i64>,
    pub yolcu_id: Option<i64>,
    pub seat: Option<i64>,
    pub price: Option<f64>,
    pub date: Option<String>,
    pub passenger_name: Option<String>,
    pub flight_code: Option<String>,
    pub flight_date: Option<String>,
    pub flight_time: Option<String>,
    pub from_city: Option<String>,
    pub to_city: Option<String>,
    pub status: TicketStatus,
}

impl Entity for Reservation {
    const RESOURCE: Resource = Resource::Reservations;
    const WRITE_RESOURCE: Resource = Resource::Tickets;
    const NOUN: &'static str = "reservation";
    const FIELDS: &'static [Field] = &[
        Field::new("yolcu_id", "Passenger", FieldKind::Reference(Lookup::Passengers)),
        Field::new("ucus_id", "Flight", FieldKind::Reference(Lookup::Flights)),
        Field::new("seat", "Seat number", FieldKind::Integer),
    ];
    const LOOKUPS: &'static [Lookup] = &[Lookup::Passengers, Lookup::Flights];
    const COLUMNS: &'static [&'static str] = &[
        "Passenger", "Flight", "Route", "Departure", "Seat", "Status",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn form_value(&self, field: &str) -> String {
        match field {
            "yolcu_id" => id_text(self.yolcu_id),
            "ucus_id" => id_text(self.ucus_id),
            "seat" => id_text(self.seat),
            _ => String::new(),
        }
    }

    fn cells(&self, _lookups: &Lookups) -> Vec<String> {
        vec![
            cell(&self.passenger_name),
            cell(&self.flight_code),
            format!("{} → {}", cell(&self.from_city), cell(&self.to_city)),
            format!("{} {}", cell(&self.flight_date), cell(&self.flight_time)),
            cell(&self.seat.map(|s| s.to_string())),
            self.status.to_string(),
        ]
    }
}
