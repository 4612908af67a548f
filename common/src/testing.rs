//! In-memory stand-in for the airline REST backend.
//!
//! Mirrors the collaborator's observable behaviour: joined display columns,
//! ticket status derived from payments, payment amount copied from the ticket,
//! ticket deletion cascading to its payments, `/stats` aggregates and the
//! login contract. Every request is recorded so tests can assert that an
//! action issued no call.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::{Map, Value, json};

use crate::api::{ApiClient, ApiError, ApiRequest, ApiResponse, Method, Transport};
use crate::config::AppConfig;

pub const BASE: &str = "http://test/api";

type Row = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fault {
    Network,
    Garbled,
    Status(u16),
}

#[derive(Default)]
struct Db {
    next_id: i64,
    airports: BTreeMap<i64, Row>,
    pilots: BTreeMap<i64, Row>,
    aircraft: BTreeMap<i64, Row>,
    flights: BTreeMap<i64, Row>,
    passengers: BTreeMap<i64, Row>,
    tickets: BTreeMap<i64, Row>,
    payments: BTreeMap<i64, Row>,
    requests: Vec<ApiRequest>,
    faults: Vec<(Method, String, Fault)>,
}

#[derive(Clone, Default)]
pub struct FakeServer {
    db: Rc<RefCell<Db>>,
}

pub fn client(server: &FakeServer) -> ApiClient<FakeServer> {
    ApiClient::new(server.clone(), &AppConfig::new(BASE))
}

fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        _ => Row::new(),
    }
}

impl FakeServer {
    /// Airports 1 and 2, aircraft 3, pilot 4 and passenger 1 exist; flight 1
    /// connects them.
    pub fn seeded() -> Self {
        let server = FakeServer::default();
        {
            let mut db = server.db.borrow_mut();
            db.next_id = 100;
            db.airports.insert(1, row(json!({"id": 1, "name": "Istanbul Airport", "city": "Istanbul", "country": "Türkiye", "code": "IST"})));
            db.airports.insert(2, row(json!({"id": 2, "name": "Esenboğa", "city": "Ankara", "country": "Türkiye", "code": "ESB"})));
            db.aircraft.insert(3, row(json!({"id": 3, "model": "Airbus A321", "code": "TC-JRA", "capacity": 220})));
            db.pilots.insert(4, row(json!({"id": 4, "name": "Ayşe Kaya", "role": "Captain"})));
            db.passengers.insert(1, row(json!({"id": 1, "name": "Mehmet Yılmaz", "tc_no": "12345678901", "email": "mehmet@example.com", "phone": "5551112233", "gender": "Erkek", "age": 34})));
            db.flights.insert(1, row(json!({"id": 1, "code": "TK2120", "kalkis_id": 1, "varis_id": 2, "ucak_id": 3, "pilot_id": 4, "date": "2025-06-01", "time": "09:30", "duration": "75"})));
        }
        server
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.db.borrow().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.db.borrow().requests.len()
    }

    /// The next request to `path` (any method) fails at the transport level.
    pub fn fail_next(&self, path: &str) {
        self.fault(None, path, Fault::Network);
    }

    /// The next request to `path` answers 200 with a non-JSON body.
    pub fn garble_next(&self, path: &str) {
        self.fault(None, path, Fault::Garbled);
    }

    /// The next `method` request to `path` answers with `status`.
    pub fn reject_next(&self, method: Method, path: &str, status: u16) {
        self.fault(Some(method), path, Fault::Status(status));
    }

    fn fault(&self, method: Option<Method>, path: &str, fault: Fault) {
        let methods = match method {
            Some(m) => vec![m],
            None => vec![Method::Get, Method::Post, Method::Put, Method::Delete],
        };
        let mut db = self.db.borrow_mut();
        for m in methods {
            db.faults.push((m, path.to_string(), fault));
        }
    }

    fn take_fault(db: &mut Db, method: Method, path: &str) -> Option<Fault> {
        let index = db
            .faults
            .iter()
            .position(|(m, p, _)| *m == method && p == path)?;
        let (_, _, fault) = db.faults.remove(index);
        db.faults.retain(|(_, p, f)| !(p == path && *f == fault));
        Some(fault)
    }
}

impl Transport for FakeServer {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut db = self.db.borrow_mut();
        db.requests.push(request.clone());

        let path = request
            .url
            .strip_prefix(BASE)
            .unwrap_or(&request.url)
            .trim_start_matches('/')
            .to_string();

        match Self::take_fault(&mut db, request.method, &path) {
            Some(Fault::Network) => return Err(ApiError::Network("connection refused".into())),
            Some(Fault::Garbled) => return Ok(text(200, "<html>oops</html>")),
            Some(Fault::Status(status)) => return Ok(reply(status, json!({"error": "rejected"}))),
            None => {}
        }

        let segments: Vec<&str> = path.split('/').collect();
        let id = segments.get(1).and_then(|s| s.parse::<i64>().ok());
        let body = request.body.clone().map(row).unwrap_or_default();
        Ok(db.route(request.method, segments[0], id, body))
    }
}

fn reply(status: u16, body: Value) -> ApiResponse {
    ApiResponse {
        status,
        body: body.to_string(),
    }
}

fn text(status: u16, body: &str) -> ApiResponse {
    ApiResponse {
        status,
        body: body.to_string(),
    }
}

fn pick(body: &Row, keys: &[&str]) -> Row {
    keys.iter()
        .map(|k| (k.to_string(), body.get(*k).cloned().unwrap_or(Value::Null)))
        .collect()
}

const FLIGHT_KEYS: &[&str] = &["code", "kalkis_id", "varis_id", "ucak_id", "pilot_id", "duration", "date", "time"];
const PASSENGER_KEYS: &[&str] = &["name", "tc_no", "email", "phone", "gender", "age"];
const AIRCRAFT_KEYS: &[&str] = &["model", "capacity", "code"];

impl Db {
    fn route(&mut self, method: Method, resource: &str, id: Option<i64>, body: Row) -> ApiResponse {
        match (method, resource, id) {
            (Method::Get, "flights", None) => reply(200, Value::Array(self.flights.keys().map(|id| self.flight_view(*id)).collect())),
            (Method::Get, "flights", Some(id)) if self.flights.contains_key(&id) => reply(200, self.flight_view(id)),
            (Method::Get, "flights", Some(_)) => text(404, "Flight not found"),
            (Method::Post, "flights", None) => self.insert(|db| &mut db.flights, pick(&body, FLIGHT_KEYS), "Flight added"),
            (Method::Put, "flights", Some(id)) => self.replace(|db| &mut db.flights, id, pick(&body, FLIGHT_KEYS)),
            (Method::Delete, "flights", Some(id)) => self.delete(|db| &mut db.flights, id),

            (Method::Get, "passengers", None) => reply(200, Value::Array(self.passengers.keys().map(|id| self.passenger_view(*id)).collect())),
            (Method::Get, "passengers", Some(id)) if self.passengers.contains_key(&id) => reply(200, self.passenger_view(id)),
            (Method::Get, "passengers", Some(_)) => text(404, "Passenger not found"),
            (Method::Post, "passengers", None) => self.insert(|db| &mut db.passengers, pick(&body, PASSENGER_KEYS), "Passenger added"),
            (Method::Put, "passengers", Some(id)) => self.replace(|db| &mut db.passengers, id, pick(&body, PASSENGER_KEYS)),
            (Method::Delete, "passengers", Some(id)) => self.delete(|db| &mut db.passengers, id),

            (Method::Get, "aircraft", None) => reply(200, Value::Array(self.aircraft.values().cloned().map(Value::Object).collect())),
            (Method::Get, "aircraft", Some(id)) => match self.aircraft.get(&id) {
                Some(r) => reply(200, Value::Object(r.clone())),
                None => text(404, "Aircraft not found"),
            },
            (Method::Post, "aircraft", None) => self.insert(|db| &mut db.aircraft, pick(&body, AIRCRAFT_KEYS), "Aircraft added"),
            (Method::Put, "aircraft", Some(id)) => self.replace(|db| &mut db.aircraft, id, pick(&body, AIRCRAFT_KEYS)),
            (Method::Delete, "aircraft", Some(id)) => self.delete(|db| &mut db.aircraft, id),

            (Method::Get, "tickets", None) => reply(200, Value::Array(self.tickets.keys().map(|id| self.ticket_view(*id)).collect())),
            (Method::Post, "tickets", None) => {
                let mut ticket = pick(&body, &["ucus_id", "yolcu_id", "seat"]);
                let price = body.get("price").cloned().unwrap_or(json!(1000));
                ticket.insert("price".into(), price);
                ticket.insert("purchase_date".into(), json!("2025-05-20 12:00:00"));
                self.insert(|db| &mut db.tickets, ticket, "Ticket created")
            }
            (Method::Delete, "tickets", Some(id)) => {
                self.payments.retain(|_, p| p["bilet_id"] != json!(id));
                self.delete(|db| &mut db.tickets, id)
            }

            (Method::Get, "payments", None) => reply(200, Value::Array(self.payments.values().cloned().map(Value::Object).collect())),
            (Method::Post, "payments", None) => {
                let ticket = body.get("bilet_id").and_then(Value::as_i64).and_then(|id| self.tickets.get(&id));
                match ticket {
                    Some(ticket) => {
                        let mut payment = pick(&body, &["bilet_id", "method"]);
                        payment.insert("amount".into(), ticket["price"].clone());
                        payment.insert("payment_date".into(), json!("2025-05-20 12:05:00"));
                        self.insert(|db| &mut db.payments, payment, "Payment received")
                    }
                    None => text(404, "Ticket not found"),
                }
            }
            (Method::Delete, "payments", Some(id)) => self.delete(|db| &mut db.payments, id),

            (Method::Get, "airports", None) => reply(200, Value::Array(self.airports.values().cloned().map(Value::Object).collect())),
            (Method::Get, "pilots", None) => reply(200, Value::Array(self.pilots.values().cloned().map(Value::Object).collect())),
            (Method::Get, "reservations", None) => reply(200, Value::Array(self.tickets.keys().map(|id| self.reservation_view(*id)).collect())),
            (Method::Get, "stats", None) => {
                let revenue: f64 = self.payments.values().filter_map(|p| p["amount"].as_f64()).sum();
                reply(
                    200,
                    json!({
                        "totalFlights": self.flights.len(),
                        "totalPassengers": self.passengers.len(),
                        "totalAircraft": self.aircraft.len(),
                        "totalTickets": self.tickets.len(),
                        "totalRevenue": revenue,
                        "paidTickets": self.payments.len(),
                        "refundedTickets": 0
                    }),
                )
            }

            (Method::Post, "login", None) => {
                let username = body.get("username").and_then(Value::as_str).unwrap_or("");
                let password = body.get("password").and_then(Value::as_str).unwrap_or("");
                if username.is_empty() || password.is_empty() {
                    reply(400, json!({"error": "Username and password required"}))
                } else if username == "admin" && password == "secret" {
                    reply(200, json!({"success": true, "token": "tok-admin", "username": "admin"}))
                } else {
                    reply(401, json!({"error": "Invalid username or password"}))
                }
            }
            (Method::Post, "logout", None) => reply(200, json!({"success": true})),

            _ => text(405, "Method Not Allowed"),
        }
    }

    fn insert(&mut self, table: fn(&mut Db) -> &mut BTreeMap<i64, Row>, mut data: Row, message: &str) -> ApiResponse {
        self.next_id += 1;
        let id = self.next_id;
        data.insert("id".into(), json!(id));
        table(self).insert(id, data);
        reply(201, json!({"id": id, "message": message}))
    }

    fn replace(&mut self, table: fn(&mut Db) -> &mut BTreeMap<i64, Row>, id: i64, mut data: Row) -> ApiResponse {
        if let Some(existing) = table(self).get_mut(&id) {
            data.insert("id".into(), json!(id));
            *existing = data;
        }
        reply(200, json!({"message": "updated"}))
    }

    fn delete(&mut self, table: fn(&mut Db) -> &mut BTreeMap<i64, Row>, id: i64) -> ApiResponse {
        table(self).remove(&id);
        reply(200, json!({"message": "deleted"}))
    }

    fn lookup(table: &BTreeMap<i64, Row>, id: &Value, key: &str) -> Value {
        id.as_i64()
            .and_then(|id| table.get(&id))
            .and_then(|r| r.get(key).cloned())
            .unwrap_or(Value::Null)
    }

    fn flight_view(&self, id: i64) -> Value {
        let f = &self.flights[&id];
        let mut view = f.clone();
        view.insert("from_city".into(), Self::lookup(&self.airports, &f["kalkis_id"], "city"));
        view.insert("from_code".into(), Self::lookup(&self.airports, &f["kalkis_id"], "code"));
        view.insert("to_city".into(), Self::lookup(&self.airports, &f["varis_id"], "city"));
        view.insert("to_code".into(), Self::lookup(&self.airports, &f["varis_id"], "code"));
        view.insert("aircraft_model".into(), Self::lookup(&self.aircraft, &f["ucak_id"], "model"));
        view.insert("aircraft_code".into(), Self::lookup(&self.aircraft, &f["ucak_id"], "code"));
        view.insert("pilot_name".into(), Self::lookup(&self.pilots, &f["pilot_id"], "name"));
        Value::Object(view)
    }

    fn passenger_view(&self, id: i64) -> Value {
        let mut view = self.passengers[&id].clone();
        let count = self
            .tickets
            .values()
            .filter(|t| t["yolcu_id"] == json!(id))
            .count();
        view.insert("reservations".into(), json!(count));
        Value::Object(view)
    }

    fn status(&self, ticket_id: i64) -> &'static str {
        if self.payments.values().any(|p| p["bilet_id"] == json!(ticket_id)) {
            "Ödendi"
        } else {
            "Beklemede"
        }
    }

    fn ticket_view(&self, id: i64) -> Value {
        let t = &self.tickets[&id];
        let mut view = t.clone();
        view.insert("passenger_name".into(), Self::lookup(&self.passengers, &t["yolcu_id"], "name"));
        view.insert("flight_code".into(), Self::lookup(&self.flights, &t["ucus_id"], "code"));
        view.insert("status".into(), json!(self.status(id)));
        Value::Object(view)
    }

    fn reservation_view(&self, id: i64) -> Value {
        let t = &self.tickets[&id];
        let flight = t["ucus_id"].as_i64().and_then(|f| self.flights.get(&f));
        let flight_value = |key: &str| flight.and_then(|f| f.get(key).cloned()).unwrap_or(Value::Null);
        let airport_city = |key: &str| {
            flight
                .map(|f| Self::lookup(&self.airports, &f[key], "city"))
                .unwrap_or(Value::Null)
        };
        json!({
            "id": id,
            "ucus_id": t["ucus_id"],
            "yolcu_id": t["yolcu_id"],
            "seat": t["seat"],
            "price": t["price"],
            "date": t["purchase_date"],
            "passenger_name": Self::lookup(&self.passengers, &t["yolcu_id"], "name"),
            "flight_code": flight_value("code"),
            "flight_date": flight_value("date"),
            "flight_time": flight_value("time"),
            "from_city": airport_city("kalkis_id"),
            "to_city": airport_city("varis_id"),
            "status": self.status(id),
        })
    }
}
