use serde::{Deserialize, Serialize};

use super::{cell, null_as_default};
use crate::api::Resource;
use crate::panel::{Entity, Field, FieldKind, Lookups};

/// Gender values stored by the server.
pub const GENDERS: &[&str] = &["Erkek", "Kadın"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Passenger {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// National identity number.
    pub tc_no: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i64>,
    /// Number of tickets held, computed by the server.
    pub reservations: i64,
}

impl Entity for Passenger {
    const RESOURCE: Resource = Resource::Passengers;
    const NOUN: &'static str = "passenger";
    const FIELDS: &'static [Field] = &[
        Field::new("name", "Full name", FieldKind::Text),
        Field::new("tc_no", "National id", FieldKind::Text),
        Field::new("email", "Email", FieldKind::Text),
        Field::new("phone", "Phone", FieldKind::Text),
        Field::new("gender", "Gender", FieldKind::Choice(GENDERS)).with_default("Erkek"),
        Field::new("age", "Age", FieldKind::Integer),
    ];
    const COLUMNS: &'static [&'static str] = &[
        "Name",
        "National id",
        "Email",
        "Phone",
        "Gender",
        "Age",
        "Reservations",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn form_value(&self, field: &str) -> String {
        match field {
            "name" => self.name.clone(),
            "tc_no" => self.tc_no.clone().unwrap_or_default(),
            "email" => self.email.clone().unwrap_or_default(),
            "phone" => self.phone.clone().unwrap_or_default(),
            "gender" => self.gender.clone().unwrap_or_default(),
            "age" => self.age.map(|a| a.to_string()).unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn cells(&self, _lookups: &Lookups) -> Vec<String> {
        vec![
            self.name.clone(),
            cell(&self.tc_no),
            cell(&self.email),
            cell(&self.phone),
            cell(&self.gender),
            cell(&self.age.map(|a| a.to_string())),
            self.reservations.to_string(),
        ]
    }
}
