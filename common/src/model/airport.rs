use serde::{Deserialize, Serialize};

/// Airport, read-only lookup data for flight origin and destination selects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Airport {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub country: Option<String>,
    /// IATA code, e.g. `IST`.
    pub code: String,
}

impl Airport {
    pub fn label(&self) -> String {
        format!("{} ({})", self.city, self.code)
    }
}
