use serde::{Deserialize, Serialize};

use super::{cell, id_text, null_as_default};
use crate::api::Resource;
use crate::panel::{Entity, Field, FieldKind, Lookups};

/// An aircraft of the fleet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aircraft {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    /// Tail code, e.g. `TC-ABC`.
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    pub capacity: Option<i64>,
}

impl Aircraft {
    /// Label used in foreign-key selects.
    pub fn label(&self) -> String {
        format!("{} ({})", self.model, self.code)
    }
}

impl Entity for Aircraft {
    const RESOURCE: Resource = Resource::Aircraft;
    const NOUN: &'static str = "aircraft";
    const FIELDS: &'static [Field] = &[
        Field::new("model", "Model", FieldKind::Text),
        Field::new("code", "Tail code", FieldKind::Text),
        Field::new("capacity", "Capacity", FieldKind::Integer),
    ];
    const COLUMNS: &'static [&'static str] = &["Model", "Tail code", "Capacity"];

    fn id(&self) -> i64 {
        self.id
    }

    fn form_value(&self, field: &str) -> String {
        match field {
            "model" => self.model.clone(),
            "code" => self.code.clone(),
            "capacity" => id_text(self.capacity),
            _ => String::new(),
        }
    }

    fn cells(&self, _lookups: &Lookups) -> Vec<String> {
        vec![
            self.model.clone(),
            self.code.clone(),
            cell(&self.capacity.map(|c| c.to_string())),
        ]
    }
}
