//! Records mirrored from the REST collaborator's JSON.
//!
//! Field names follow the wire format (some of them Turkish, such as
//! `kalkis_id` or `yolcu_id`) so that the structs round-trip without renames.
//! Joined display columns produced by the server are optional because its
//! `LEFT JOIN`s return `null` when the referenced row is gone.

pub mod aircraft;
pub mod airport;
pub mod auth;
pub mod flight;
pub mod passenger;
pub mod payment;
pub mod pilot;
pub mod reservation;
pub mod stats;
pub mod ticket;

pub use aircraft::Aircraft;
pub use airport::Airport;
pub use auth::{LoginRequest, LoginResponse};
pub use flight::Flight;
pub use passenger::Passenger;
pub use payment::Payment;
pub use pilot::Pilot;
pub use reservation::Reservation;
pub use stats::Stats;
pub use ticket::{Ticket, TicketStatus};

use serde::{Deserialize, Deserializer};

/// Accepts a JSON string, number or null for a text column.
///
/// SQLite keeps whatever type was inserted, so columns such as a flight's
/// `duration` come back as `"90"` or `90` depending on who wrote the row.
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Decodes a `null` column as the type's default.
///
/// Text typed into a form can be stored as `null` by the server, which would
/// otherwise make the whole list undecodable.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Renders an optional column for a table cell.
pub fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

/// Renders an optional id or number as form text (empty when missing).
pub(crate) fn id_text(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
