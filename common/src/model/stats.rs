use serde::{Deserialize, Serialize};

/// Aggregate counters returned by `GET /stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stats {
    pub total_flights: i64,
    pub total_passengers: i64,
    pub total_aircraft: i64,
    pub total_tickets: i64,
    pub total_revenue: f64,
    pub paid_tickets: i64,
    pub refunded_tickets: i64,
}

impl Stats {
    /// Tickets sold but not yet paid.
    pub fn pending_payments(&self) -> i64 {
        (self.total_tickets - self.paid_tickets).max(0)
    }
}
