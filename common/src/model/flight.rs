use serde::{Deserialize, Serialize};

use super::{cell, id_text, null_as_default, text_or_number};
use crate::api::Resource;
use crate::panel::{Entity, Field, FieldKind, Lookup, Lookups};

/// A scheduled flight as listed by `GET /flights`.
///
/// `kalkis_id`/`varis_id` are the origin/destination airport ids, `ucak_id` the
/// aircraft. The `from_*`, `to_*`, `aircraft_*` and `pilot_name` columns are
/// joined in by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flight {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    pub kalkis_id: Option<i64>,
    pub varis_id: Option<i64>,
    pub from_city: Option<String>,
    pub from_code: Option<String>,
    pub to_city: Option<String>,
    pub to_code: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub duration: Option<String>,
    pub ucak_id: Option<i64>,
    pub aircraft_model: Option<String>,
    pub aircraft_code: Option<String>,
    pub pilot_id: Option<i64>,
    pub pilot_name: Option<String>,
}

impl Flight {
    /// Label used in ticket and reservation selects.
    pub fn label(&self) -> String {
        format!(
            "{} - {} → {} ({})",
            self.code,
            cell(&self.from_city),
            cell(&self.to_city),
            cell(&self.date)
        )
    }

    /// Origin city, falling back to the airport lookup when the server did not
    /// join it.
    fn origin(&self, lookups: &Lookups) -> String {
        self.from_city
            .clone()
            .or_else(|| lookups.airport(self.kalkis_id).map(|a| a.city.clone()))
            .unwrap_or_else(|| "-".to_string())
    }

    fn destination(&self, lookups: &Lookups) -> String {
        self.to_city
            .clone()
            .or_else(|| lookups.airport(self.varis_id).map(|a| a.city.clone()))
            .unwrap_or_else(|| "-".to_string())
    }
}

impl Entity for Flight {
    const RESOURCE: Resource = Resource::Flights;
    const NOUN: &'static str = "flight";
    const FIELDS: &'static [Field] = &[
        Field::new("code", "Flight code", FieldKind::Text),
        Field::new("kalkis_id", "Origin", FieldKind::Reference(Lookup::Airports)),
        Field::new("varis_id", "Destination", FieldKind::Reference(Lookup::Airports)),
        Field::new("ucak_id", "Aircraft", FieldKind::Reference(Lookup::Aircraft)),
        Field::new("pilot_id", "Pilot", FieldKind::Reference(Lookup::Pilots)),
        Field::new("date", "Date", FieldKind::Date),
        Field::new("time", "Departure time", FieldKind::Time),
        Field::new("duration", "Duration", FieldKind::Text),
    ];
    const LOOKUPS: &'static [Lookup] = &[Lookup::Airports, Lookup::Pilots, Lookup::Aircraft];
    const COLUMNS: &'static [&'static str] = &[
        "Flight code",
        "Origin",
        "Destination",
        "Date",
        "Time",
        "Aircraft",
        "Pilot",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn form_value(&self, field: &str) -> String {
        match field {
            "code" => self.code.clone(),
            "kalkis_id" => id_text(self.kalkis_id),
            "varis_id" => id_text(self.varis_id),
            "ucak_id" => id_text(self.ucak_id),
            "pilot_id" => id_text(self.pilot_id),
            "date" => self.date.clone().unwrap_or_default(),
            "time" => self.time.clone().unwrap_or_default(),
            "duration" => self.duration.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn cells(&self, lookups: &Lookups) -> Vec<String> {
        let aircraft = self
            .aircraft_model
            .clone()
            .or_else(|| lookups.aircraft_by_id(self.ucak_id).map(|a| a.model.clone()));
        let pilot = self
            .pilot_name
            .clone()
            .or_else(|| lookups.pilot(self.pilot_id).map(|p| p.name.clone()));
        vec![
            self.code.clone(),
            self.origin(lookups),
            self.destination(lookups),
            cell(&self.date),
            cell(&self.time),
            cell(&aircraft),
            cell(&pilot),
        ]
    }
}
