//! Generic CRUD panel.
//!
//! Every screen of the dashboard follows the same lifecycle: load the entity
//! list plus the lookup lists its selects need, show a list, a create form and
//! an edit form, and after any successful write discard everything and reload
//! from the server. [`PanelState`] holds that lifecycle for any [`Entity`];
//! the async functions in this module perform the matching requests.
//!
//! Loads are tagged with a generation number. Only the most recently issued
//! load may update the state, so a slow response cannot overwrite a newer one.

mod form;
mod notice;

pub use form::{FormState, parse_int};
pub use notice::Action;

use futures_util::future::{try_join, try_join_all};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{ApiClient, ApiError, Resource, Transport};
use crate::model::{Aircraft, Airport, Flight, Passenger, Payment, Pilot, Stats};

/// A record type that can be driven by a [`PanelState`].
pub trait Entity: DeserializeOwned + Clone + PartialEq + 'static {
    /// Collection the list is read from.
    const RESOURCE: Resource;
    /// Collection writes go to, when it differs from [`Entity::RESOURCE`].
    const WRITE_RESOURCE: Resource = Self::RESOURCE;
    /// Lower-case singular name used in messages.
    const NOUN: &'static str;
    /// Form schema, in display order.
    const FIELDS: &'static [Field];
    /// Lists fetched alongside the entity list.
    const LOOKUPS: &'static [Lookup] = &[];
    /// Table headers matching [`Entity::cells`].
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;

    /// Current value of a form field, as the text an input would hold.
    fn form_value(&self, field: &str) -> String;

    /// Display cells for the list table.
    fn cells(&self, lookups: &Lookups) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Date,
    Time,
    /// Fixed set of string values.
    Choice(&'static [&'static str]),
    /// Integer id picked from a lookup list.
    Reference(Lookup),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: &'static str,
}

impl Field {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            default: "",
        }
    }

    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }
}

/// Secondary collections a panel may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    Airports,
    Aircraft,
    Pilots,
    Passengers,
    Flights,
    Payments,
    Stats,
}

/// Lookup data loaded next to the entity list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookups {
    pub airports: Vec<Airport>,
    pub aircraft: Vec<Aircraft>,
    pub pilots: Vec<Pilot>,
    pub passengers: Vec<Passenger>,
    pub flights: Vec<Flight>,
    pub payments: Vec<Payment>,
    pub stats: Stats,
}

impl Lookups {
    pub fn airport(&self, id: Option<i64>) -> Option<&Airport> {
        id.and_then(|id| self.airports.iter().find(|a| a.id == id))
    }

    pub fn aircraft_by_id(&self, id: Option<i64>) -> Option<&Aircraft> {
        id.and_then(|id| self.aircraft.iter().find(|a| a.id == id))
    }

    pub fn pilot(&self, id: Option<i64>) -> Option<&Pilot> {
        id.and_then(|id| self.pilots.iter().find(|p| p.id == id))
    }

    /// `(id, label)` pairs for a foreign-key select.
    pub fn options(&self, lookup: Lookup) -> Vec<(i64, String)> {
        match lookup {
            Lookup::Airports => self.airports.iter().map(|a| (a.id, a.label())).collect(),
            Lookup::Aircraft => self.aircraft.iter().map(|a| (a.id, a.label())).collect(),
            Lookup::Pilots => self.pilots.iter().map(|p| (p.id, p.name.clone())).collect(),
            Lookup::Passengers => self.passengers.iter().map(|p| (p.id, p.name.clone())).collect(),
            Lookup::Flights => self.flights.iter().map(|f| (f.id, f.label())).collect(),
            Lookup::Payments | Lookup::Stats => Vec::new(),
        }
    }

    fn absorb(&mut self, data: LookupData) {
        match data {
            LookupData::Airports(v) => self.airports = v,
            LookupData::Aircraft(v) => self.aircraft = v,
            LookupData::Pilots(v) => self.pilots = v,
            LookupData::Passengers(v) => self.passengers = v,
            LookupData::Flights(v) => self.flights = v,
            LookupData::Payments(v) => self.payments = v,
            LookupData::Stats(v) => self.stats = v,
        }
    }
}

enum LookupData {
    Airports(Vec<Airport>),
    Aircraft(Vec<Aircraft>),
    Pilots(Vec<Pilot>),
    Passengers(Vec<Passenger>),
    Flights(Vec<Flight>),
    Payments(Vec<Payment>),
    Stats(Stats),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Listing,
    Creating,
    Editing { id: i64 },
}

/// Identifies one issued load; see [`PanelState::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct LoadTicket(u64);

/// Everything one load returns.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelData<E> {
    pub records: Vec<E>,
    pub lookups: Lookups,
}

/// The request a submit will issue.
#[derive(Debug, Clone, PartialEq)]
pub enum Write {
    Create(Value),
    Update { id: i64, payload: Value },
}

impl Write {
    pub fn action(&self) -> Action {
        match self {
            Write::Create(_) => Action::Add,
            Write::Update { .. } => Action::Update,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState<E: Entity> {
    pub loading: bool,
    pub mode: Mode,
    pub records: Vec<E>,
    pub lookups: Lookups,
    pub form: FormState,
    /// Cause of the last failed load, kept for logging and diagnostics.
    pub last_error: Option<String>,
    generation: u64,
}

impl<E: Entity> Default for PanelState<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> PanelState<E> {
    pub fn new() -> Self {
        Self {
            loading: true,
            mode: Mode::Listing,
            records: Vec::new(),
            lookups: Lookups::default(),
            form: FormState::for_fields(E::FIELDS),
            last_error: None,
            generation: 0,
        }
    }

    /// Marks a new load as in flight and returns its ticket. Any load issued
    /// earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Applies the result of a load. Returns `false`, leaving the state
    /// untouched, when `ticket` is not the latest issued one.
    ///
    /// On failure the previous lists are kept (empty on first mount) and the
    /// error is logged.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<PanelData<E>, ApiError>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                "dropping stale {} load (generation {} < {})",
                E::NOUN,
                ticket.0,
                self.generation
            );
            return false;
        }
        match result {
            Ok(data) => {
                self.records = data.records;
                self.lookups = data.lookups;
                self.last_error = None;
            }
            Err(e) => {
                warn!("error loading {} data: {e}", E::NOUN);
                self.last_error = Some(e.to_string());
            }
        }
        self.loading = false;
        true
    }

    pub fn record(&self, id: i64) -> Option<&E> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn start_create(&mut self) {
        self.form = FormState::for_fields(E::FIELDS);
        self.mode = Mode::Creating;
    }

    /// Copies `record` into the form and switches to editing it.
    pub fn start_edit(&mut self, record: &E) {
        let mut form = FormState::for_fields(E::FIELDS);
        for field in E::FIELDS {
            form.set(field.name, record.form_value(field.name));
        }
        self.form = form;
        self.mode = Mode::Editing { id: record.id() };
    }

    /// Drops the form and returns to the list. Issues no request.
    pub fn cancel(&mut self) {
        self.form = FormState::for_fields(E::FIELDS);
        self.mode = Mode::Listing;
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.form.set(name, value);
    }

    pub fn payload(&self) -> Value {
        self.form.payload(E::FIELDS)
    }

    /// The write a submit issues in the current mode: an update of the record
    /// being edited, a create otherwise.
    pub fn pending_write(&self) -> Write {
        match self.mode {
            Mode::Editing { id } => Write::Update {
                id,
                payload: self.payload(),
            },
            Mode::Listing | Mode::Creating => Write::Create(self.payload()),
        }
    }

    /// Resets form and mode after a successful write. The caller reloads.
    pub fn complete_write(&mut self) {
        self.cancel();
    }
}

/// Fetches the entity list and all of its lookups concurrently. Any failing
/// request fails the whole load.
pub async fn load<E: Entity, T: Transport + Clone>(client: &ApiClient<T>) -> Result<PanelData<E>, ApiError> {
    let lookups = try_join_all(E::LOOKUPS.iter().map(|l| fetch_lookup(client, *l)));
    let (records, fetched) = try_join(client.list::<E>(), lookups).await?;

    let mut lookups = Lookups::default();
    for data in fetched {
        lookups.absorb(data);
    }
    Ok(PanelData { records, lookups })
}

async fn fetch_lookup<T: Transport + Clone>(client: &ApiClient<T>, lookup: Lookup) -> Result<LookupData, ApiError> {
    Ok(match lookup {
        Lookup::Airports => LookupData::Airports(client.list_of(Resource::Airports).await?),
        Lookup::Aircraft => LookupData::Aircraft(client.list::<Aircraft>().await?),
        Lookup::Pilots => LookupData::Pilots(client.list_of(Resource::Pilots).await?),
        Lookup::Passengers => LookupData::Passengers(client.list::<Passenger>().await?),
        Lookup::Flights => LookupData::Flights(client.list::<Flight>().await?),
        Lookup::Payments => LookupData::Payments(client.payments().await?),
        Lookup::Stats => LookupData::Stats(client.stats().await?),
    })
}

/// Issues a create or update for `E`.
pub async fn submit<E: Entity, T: Transport + Clone>(client: &ApiClient<T>, write: &Write) -> Result<(), ApiError> {
    match write {
        Write::Create(payload) => {
            client.create(E::WRITE_RESOURCE, payload).await?;
        }
        Write::Update { id, payload } => {
            client.update(E::WRITE_RESOURCE, *id, payload).await?;
        }
    }
    Ok(())
}

/// Deletes one `E` by id. Confirmation is the caller's job.
pub async fn remove<E: Entity, T: Transport + Clone>(client: &ApiClient<T>, id: i64) -> Result<(), ApiError> {
    client.remove(E::WRITE_RESOURCE, id).await?;
    Ok(())
}

#[cfg(test)]
mod tests;
