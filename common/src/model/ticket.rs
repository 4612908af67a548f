use std::fmt;

use serde::{Deserialize, Serialize};

use super::{cell, id_text};
use crate::api::Resource;
use crate::panel::{Entity, Field, FieldKind, Lookup, Lookups};
use crate::tickets::{DEFAULT_PAYMENT_METHOD, PAYMENT_METHODS};

/// Payment state of a ticket, derived by the server from the presence of a
/// payment row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    /// `"Beklemede"`
    #[default]
    Pending,
    /// `"Ödendi"`
    Paid,
    /// `"İade Edildi"`
    Refunded,
    Other(String),
}

impl TicketStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TicketStatus::Pending => "Beklemede",
            TicketStatus::Paid => "Ödendi",
            TicketStatus::Refunded => "İade Edildi",
            TicketStatus::Other(s) => s,
        }
    }
}

impl From<String> for TicketStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Beklemede" => TicketStatus::Pending,
            "Ödendi" => TicketStatus::Paid,
            "İade Edildi" => TicketStatus::Refunded,
            _ => TicketStatus::Other(value),
        }
    }
}

impl From<TicketStatus> for String {
    fn from(value: TicketStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sold ticket (`ucus_id` = flight, `yolcu_id` = passenger).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    pub id: i64,
    pub ucus_id: Option<i64>,
    pub yolcu_id: Option<i64>,
    pub seat: Option<i64>,
    pub price: Option<f64>,
    pub purchase_date: Option<String>,
    pub passenger_name: Option<String>,
    pub flight_code: Option<String>,
    pub status: TicketStatus,
}

impl Ticket {
    pub fn price_text(&self) -> String {
        self.price
            .map(|p| format!("₺{p}"))
            .unwrap_or_else(|| "-".to_string())
    }
}

/// The ticket form is the purchase form: ticket fields plus the payment
/// method used for the follow-up payment.
impl Entity for Ticket {
    const RESOURCE: Resource = Resource::Tickets;
    const NOUN: &'static str = "ticket";
    const FIELDS: &'static [Field] = &[
        Field::new("yolcu_id", "Passenger", FieldKind::Reference(Lookup::Passengers)),
        Field::new("ucus_id", "Flight", FieldKind::Reference(Lookup::Flights)),
        Field::new("seat", "Seat number", FieldKind::Integer),
        Field::new("price", "Price (₺)", FieldKind::Integer),
        Field::new("method", "Payment method", FieldKind::Choice(PAYMENT_METHODS))
            .with_default(DEFAULT_PAYMENT_METHOD),
    ];
    const LOOKUPS: &'static [Lookup] = &[Lookup::Passengers, Lookup::Flights, Lookup::Payments, Lookup::Stats];
    const COLUMNS: &'static [&'static str] = &[
        "Ticket", "Passenger", "Flight", "Seat", "Price", "Date", "Status",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn form_value(&self, field: &str) -> String {
        match field {
            "yolcu_id" => id_text(self.yolcu_id),
            "ucus_id" => id_text(self.ucus_id),
            "seat" => id_text(self.seat),
            "price" => self.price.map(|p| p.to_string()).unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn cells(&self, _lookups: &Lookups) -> Vec<String> {
        vec![
            format!("#{}", self.id),
            cell(&self.passenger_name),
            cell(&self.flight_code),
            cell(&self.seat.map(|s| s.to_string())),
            self.price_text(),
            cell(&self.purchase_date),
            self.status.to_string(),
        ]
    }
}
