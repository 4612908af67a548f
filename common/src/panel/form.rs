use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::{Field, FieldKind};

/// Raw form state: every input is kept as the string the user typed and only
/// coerced when a payload is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<&'static str, String>,
}

impl FormState {
    /// A form holding each field's default value.
    pub fn for_fields(fields: &'static [Field]) -> Self {
        Self {
            values: fields
                .iter()
                .map(|f| (f.name, f.default.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Sets a known field. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value.into();
        }
    }

    pub fn text(&self, name: &str) -> String {
        self.get(name).to_string()
    }

    /// Integer value of a field, `None` when blank or not a number.
    pub fn integer(&self, name: &str) -> Option<i64> {
        parse_int(self.get(name))
    }

    /// JSON body built from the form, coercing each field by its kind.
    ///
    /// Blank or non-numeric integer inputs become `null`; nothing is rejected
    /// here, the server decides.
    pub fn payload(&self, fields: &'static [Field]) -> Value {
        let mut map = Map::new();
        for field in fields {
            let raw = self.get(field.name);
            let value = match field.kind {
                FieldKind::Integer | FieldKind::Reference(_) => {
                    parse_int(raw).map(Value::from).unwrap_or(Value::Null)
                }
                FieldKind::Text | FieldKind::Date | FieldKind::Time | FieldKind::Choice(_) => {
                    Value::String(raw.to_string())
                }
            };
            map.insert(field.name.to_string(), value);
        }
        Value::Object(map)
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits; anything
/// after the digits is ignored (`"12abc"` is 12, `"1.9"` is 1).
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Lookup;
    use serde_json::json;

    const FIELDS: &[Field] = &[
        Field::new("model", "Model", FieldKind::Text),
        Field::new("capacity", "Capacity", FieldKind::Integer),
        Field::new("ucak_id", "Aircraft", FieldKind::Reference(Lookup::Aircraft)),
        Field::new("gender", "Gender", FieldKind::Choice(&["Erkek", "Kadın"])).with_default("Erkek"),
    ];

    #[test]
    fn parse_int_reads_leading_digits() {
        assert_eq!(parse_int("180"), Some(180));
        assert_eq!(parse_int("  42"), Some(42));
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("1.9"), Some(1));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn defaults_are_applied() {
        let form = FormState::for_fields(FIELDS);
        assert_eq!(form.get("gender"), "Erkek");
        assert_eq!(form.get("model"), "");
    }

    #[test]
    fn payload_coerces_by_kind() {
        let mut form = FormState::for_fields(FIELDS);
        form.set("model", "Boeing 737");
        form.set("capacity", "180");
        form.set("ucak_id", "3");
        assert_eq!(
            form.payload(FIELDS),
            json!({"model": "Boeing 737", "capacity": 180, "ucak_id": 3, "gender": "Erkek"})
        );
    }

    #[test]
    fn invalid_numbers_are_sent_as_null() {
        let mut form = FormState::for_fields(FIELDS);
        form.set("capacity", "lots");
        let payload = form.payload(FIELDS);
        assert_eq!(payload["capacity"], Value::Null);
        assert_eq!(payload["ucak_id"], Value::Null);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut form = FormState::for_fields(FIELDS);
        form.set("nope", "x");
        assert_eq!(form.get("nope"), "");
        assert_eq!(form, FormState::for_fields(FIELDS));
    }
}
