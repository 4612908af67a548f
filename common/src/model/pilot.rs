use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pilot {
    pub id: i64,
    pub name: String,
    pub role: Option<String>,
}
