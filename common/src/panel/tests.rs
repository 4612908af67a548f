use super::*;
use crate::api::Method;
use crate::model::{Aircraft, Flight, Passenger};
use crate::testing::{FakeServer, client};

async fn reload<E: Entity>(panel: &mut PanelState<E>, server: &FakeServer) {
    let ticket = panel.begin_load();
    let result = load::<E, _>(&client(server)).await;
    assert!(panel.finish_load(ticket, result));
}

async fn submit_form<E: Entity>(panel: &mut PanelState<E>, server: &FakeServer) -> Result<(), ApiError> {
    let write = panel.pending_write();
    submit::<E, _>(&client(server), &write).await?;
    panel.complete_write();
    reload(panel, server).await;
    Ok(())
}

// =============================================================================
// lifecycle
// =============================================================================

#[test]
fn starts_loading_in_listing_mode() {
    let panel = PanelState::<Aircraft>::new();
    assert!(panel.loading);
    assert_eq!(panel.mode, Mode::Listing);
    assert!(panel.records.is_empty());
}

#[tokio::test]
async fn aircraft_create_update_delete_cycle() {
    let server = FakeServer::seeded();
    let mut panel = PanelState::<Aircraft>::new();
    reload(&mut panel, &server).await;
    assert!(!panel.loading);
    let before = panel.records.len();

    panel.start_create();
    panel.set_field("model", "Boeing 737");
    panel.set_field("code", "TC-ABC");
    panel.set_field("capacity", "180");
    submit_form(&mut panel, &server).await.unwrap();

    assert_eq!(panel.records.len(), before + 1);
    let created = panel
        .records
        .iter()
        .find(|a| a.code == "TC-ABC")
        .cloned()
        .unwrap();
    assert_eq!(created.model, "Boeing 737");
    assert_eq!(created.capacity, Some(180));
    assert_eq!(panel.mode, Mode::Listing);
    assert_eq!(panel.form.get("code"), "");

    panel.start_edit(&created);
    assert_eq!(panel.mode, Mode::Editing { id: created.id });
    assert_eq!(panel.form.get("capacity"), "180");
    panel.set_field("capacity", "189");
    submit_form(&mut panel, &server).await.unwrap();

    let updated = panel.record(created.id).unwrap();
    assert_eq!(updated.capacity, Some(189));
    assert_eq!(updated.model, "Boeing 737");

    remove::<Aircraft, _>(&client(&server), created.id).await.unwrap();
    reload(&mut panel, &server).await;
    assert!(panel.records.iter().all(|a| a.code != "TC-ABC"));
    assert_eq!(panel.records.len(), before);
}

#[tokio::test]
async fn aircraft_saved_with_blank_capacity_stays_listed() {
    let server = FakeServer::seeded();
    let mut panel = PanelState::<Aircraft>::new();
    reload(&mut panel, &server).await;
    let before = panel.records.len();

    panel.start_create();
    panel.set_field("model", "ATR 72");
    panel.set_field("code", "TC-ATR");
    submit_form(&mut panel, &server).await.unwrap();

    assert!(panel.last_error.is_none());
    assert_eq!(panel.records.len(), before + 1);
    let created = panel.records.iter().find(|a| a.code == "TC-ATR").cloned().unwrap();
    assert_eq!(created.capacity, None);
    assert_eq!(created.cells(&panel.lookups)[2], "-");
    panel.start_edit(&created);
    assert_eq!(panel.form.get("capacity"), "");

    let mut flights = PanelState::<Flight>::new();
    reload(&mut flights, &server).await;
    assert!(flights.last_error.is_none());
    assert_eq!(flights.lookups.aircraft.len(), 2);
}

#[tokio::test]
async fn rows_with_null_text_columns_still_load() {
    let server = FakeServer::seeded();
    let write = Write::Create(serde_json::json!({"name": null, "age": 41}));
    submit::<Passenger, _>(&client(&server), &write).await.unwrap();
    let write = Write::Create(serde_json::json!({"model": null, "code": null, "capacity": 70}));
    submit::<Aircraft, _>(&client(&server), &write).await.unwrap();

    let passengers = load::<Passenger, _>(&client(&server)).await.unwrap();
    let unnamed = passengers.records.iter().find(|p| p.age == Some(41)).unwrap();
    assert_eq!(unnamed.name, "");

    let aircraft = load::<Aircraft, _>(&client(&server)).await.unwrap();
    let blank = aircraft.records.iter().find(|a| a.capacity == Some(70)).unwrap();
    assert_eq!(blank.model, "");
    assert_eq!(blank.code, "");
}

#[tokio::test]
async fn flight_rows_show_joined_names() {
    let server = FakeServer::seeded();
    let mut panel = PanelState::<Flight>::new();
    reload(&mut panel, &server).await;

    panel.start_create();
    panel.set_field("code", "TK2200");
    panel.set_field("kalkis_id", "1");
    panel.set_field("varis_id", "2");
    panel.set_field("ucak_id", "3");
    panel.set_field("pilot_id", "4");
    panel.set_field("date", "2025-07-01");
    panel.set_field("time", "14:00");
    panel.set_field("duration", "70");
    submit_form(&mut panel, &server).await.unwrap();

    let flight = panel.records.iter().find(|f| f.code == "TK2200").unwrap();
    let cells = flight.cells(&panel.lookups);
    assert_eq!(cells[1], "Istanbul");
    assert_eq!(cells[2], "Ankara");
    assert_eq!(cells[5], "Airbus A321");
    assert_eq!(cells[6], "Ayşe Kaya");
    assert!(cells.iter().all(|c| c != "1" && c != "3"));
}

#[tokio::test]
async fn flight_load_brings_lookup_lists() {
    let server = FakeServer::seeded();
    let mut panel = PanelState::<Flight>::new();
    reload(&mut panel, &server).await;

    assert_eq!(panel.lookups.airports.len(), 2);
    assert_eq!(panel.lookups.pilots.len(), 1);
    assert_eq!(panel.lookups.aircraft.len(), 1);
    assert_eq!(
        panel.lookups.options(Lookup::Airports),
        vec![(1, "Istanbul (IST)".to_string()), (2, "Ankara (ESB)".to_string())]
    );
    assert_eq!(
        panel.lookups.options(Lookup::Aircraft),
        vec![(3, "Airbus A321 (TC-JRA)".to_string())]
    );
    // flights + airports + pilots + aircraft
    assert_eq!(server.request_count(), 4);
}

#[tokio::test]
async fn passenger_update_replaces_full_record() {
    let server = FakeServer::seeded();
    let mut panel = PanelState::<Passenger>::new();
    reload(&mut panel, &server).await;

    let passenger = panel.record(1).cloned().unwrap();
    panel.start_edit(&passenger);
    assert_eq!(panel.form.get("age"), "34");
    assert_eq!(panel.form.get("gender"), "Erkek");
    panel.set_field("email", "m.yilmaz@example.com");
    panel.set_field("gender", "Kadın");
    submit_form(&mut panel, &server).await.unwrap();

    let updated = panel.record(1).unwrap();
    assert_eq!(updated.email.as_deref(), Some("m.yilmaz@example.com"));
    assert_eq!(updated.gender.as_deref(), Some("Kadın"));
    assert_eq!(updated.name, passenger.name);
}

// =============================================================================
// cancel / failures
// =============================================================================

#[tokio::test]
async fn cancel_edit_issues_no_request_and_clears_form() {
    let server = FakeServer::seeded();
    let mut panel = PanelState::<Aircraft>::new();
    reload(&mut panel, &server).await;
    let records = panel.records.clone();
    let calls = server.request_count();

    let aircraft = records[0].clone();
    panel.start_edit(&aircraft);
    panel.set_field("model", "Changed");
    panel.cancel();

    assert_eq!(panel.mode, Mode::Listing);
    assert_eq!(panel.form, FormState::for_fields(Aircraft::FIELDS));
    assert_eq!(panel.records, records);
    assert_eq!(server.request_count(), calls);
}

#[tokio::test]
async fn failed_submit_leaves_state_unchanged() {
    let server = FakeServer::seeded();
    let mut panel = PanelState::<Aircraft>::new();
    reload(&mut panel, &server).await;

    panel.start_create();
    panel.set_field("model", "ATR 72");
    let snapshot = panel.clone();
    server.reject_next(Method::Post, "aircraft", 500);

    let err = submit_form(&mut panel, &server).await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 500, .. }));
    assert_eq!(panel, snapshot);
}

#[tokio::test]
async fn failed_load_keeps_previous_lists() {
    let server = FakeServer::seeded();
    let mut panel = PanelState::<Flight>::new();
    reload(&mut panel, &server).await;
    let records = panel.records.clone();

    server.fail_next("pilots");
    let ticket = panel.begin_load();
    let result = load::<Flight, _>(&client(&server)).await;
    assert!(result.is_err());
    assert!(panel.finish_load(ticket, result));

    assert!(!panel.loading);
    assert_eq!(panel.records, records);
    assert!(panel.last_error.as_deref().unwrap().contains("network"));
}

#[tokio::test]
async fn first_load_failure_shows_empty_list() {
    let server = FakeServer::seeded();
    server.fail_next("aircraft");
    let mut panel = PanelState::<Aircraft>::new();
    let ticket = panel.begin_load();
    let result = load::<Aircraft, _>(&client(&server)).await;
    panel.finish_load(ticket, result);

    assert!(!panel.loading);
    assert!(panel.records.is_empty());
    assert!(panel.last_error.is_some());
}

// =============================================================================
// stale responses
// =============================================================================

#[test]
fn stale_load_cannot_overwrite_newer_state() {
    let mut panel = PanelState::<Aircraft>::new();
    let old = panel.begin_load();
    let new = panel.begin_load();

    let fresh = PanelData {
        records: vec![Aircraft { id: 1, model: "A350".into(), code: "TC-NEW".into(), capacity: Some(300) }],
        lookups: Lookups::default(),
    };
    let stale = PanelData {
        records: vec![Aircraft { id: 1, model: "A350".into(), code: "TC-OLD".into(), capacity: Some(250) }],
        lookups: Lookups::default(),
    };

    assert!(panel.finish_load(new, Ok(fresh.clone())));
    assert!(!panel.finish_load(old, Ok(stale)));
    assert_eq!(panel.records, fresh.records);
}

#[test]
fn stale_load_does_not_clear_loading_of_newer_one() {
    let mut panel = PanelState::<Aircraft>::new();
    let old = panel.begin_load();
    let _new = panel.begin_load();
    assert!(!panel.finish_load(old, Err(ApiError::Network("timeout".into()))));
    assert!(panel.loading);
    assert!(panel.last_error.is_none());
}

#[test]
fn pending_write_follows_mode() {
    let mut panel = PanelState::<Aircraft>::new();
    assert_eq!(panel.pending_write().action(), Action::Add);
    panel.start_edit(&Aircraft { id: 9, ..Aircraft::default() });
    assert!(matches!(panel.pending_write(), Write::Update { id: 9, .. }));
    assert_eq!(panel.pending_write().action(), Action::Update);
}
