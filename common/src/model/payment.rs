use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A payment attached to a ticket (`bilet_id`). The amount is copied from the
/// ticket price by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    pub id: i64,
    pub bilet_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub method: String,
    pub amount: Option<f64>,
    pub payment_date: Option<String>,
    pub passenger_name: Option<String>,
    pub flight_code: Option<String>,
}
