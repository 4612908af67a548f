//! Reservations sub-panel: lists booked tickets with their flight details,
//! books new ones at the fixed reservation price and cancels them.

use common::api::{ApiError, Created};
use common::model::Reservation;
use common::panel::{self, Action, Entity, LoadTicket, PanelData, PanelState};
use common::tickets::{cancel_reservation, reservation_request, reserve};
use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::crud_panel::PanelProps;
use crate::components::form_fields::field_list;
use crate::platform::{alert, confirm};

pub enum Msg {
    Loaded(LoadTicket, Result<PanelData<Reservation>, ApiError>),
    SetField(&'static str, String),
    Reserve,
    Reserved(Result<Created, ApiError>),
    Cancel(i64),
    Cancelled(Result<(), ApiError>),
}

pub struct ReservationsPanel {
    state: PanelState<Reservation>,
    loaded: bool,
}

impl ReservationsPanel {
    fn reload(&mut self, ctx: &Context<Self>) {
        let ticket = self.state.begin_load();
        let client = ctx.props().client.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = panel::load::<Reservation, _>(&client).await;
            link.send_message(Msg::Loaded(ticket, result));
        });
    }

    /// Alerts the outcome and, on success, reloads through the parent when
    /// it listens.
    fn finish(&mut self, ctx: &Context<Self>, action: Action, error: Option<ApiError>) -> bool {
        if let Some(e) = error {
            error!("{:?} failed: {}", action, e);
            alert(&action.failure(Reservation::NOUN));
            return false;
        }
        alert(&action.success(Reservation::NOUN));
        match &ctx.props().on_change {
            Some(on_change) => on_change.emit(()),
            None => self.reload(ctx),
        }
        true
    }
}

impl Component for ReservationsPanel {
    type Message = Msg;
    type Properties = PanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: PanelState::new(),
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(ticket, result) => self.state.finish_load(ticket, result),
            Msg::SetField(name, value) => {
                self.state.set_field(name, value);
                true
            }
            Msg::Reserve => {
                let request = reservation_request(&self.state.form);
                let client = ctx.props().client.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Reserved(reserve(&client, &request).await));
                });
                false
            }
            Msg::Reserved(result) => match result {
                Ok(created) => {
                    log::info!("reservation {} created", created.id);
                    self.state.complete_write();
                    self.finish(ctx, Action::Reserve, None)
                }
                Err(e) => self.finish(ctx, Action::Reserve, Some(e)),
            },
            Msg::Cancel(id) => {
                if let Some(question) = Action::CancelReservation.confirmation(Reservation::NOUN) {
                    if !confirm(&question) {
                        return false;
                    }
                }
                let client = ctx.props().client.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Cancelled(cancel_reservation(&client, id).await));
                });
                false
            }
            Msg::Cancelled(result) => self.finish(ctx, Action::CancelReservation, result.err()),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.revision != old_props.revision || props.client != old_props.client {
            self.reload(ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let title = ctx.props().title.clone();
        if self.state.loading {
            return html! {
                <section class="panel">
                    <h2>{ title }</h2>
                    <div class="loading">{"Loading..."}</div>
                </section>
            };
        }

        let on_input = link.callback(|(name, value): (&'static str, String)| Msg::SetField(name, value));
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Reserve
        });

        html! {
            <section class="panel">
                <h2>{ title }</h2>
                <form class="panel-form" {onsubmit}>
                    { field_list(Reservation::FIELDS, &self.state.form, &self.state.lookups, &on_input) }
                    <div class="form-actions">
                        <button type="submit" class="btn-primary">{"Reserve"}</button>
                    </div>
                </form>
                { self.build_table(link) }
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            self.reload(ctx);
        }
    }
}

impl ReservationsPanel {
    fn build_table(&self, link: &yew::html::Scope<Self>) -> Html {
        if self.state.records.is_empty() {
            return html! { <p class="empty">{"No reservations."}</p> };
        }

        html! {
            <table class="data-table">
                <thead>
                    <tr>
                        { for Reservation::COLUMNS.iter().map(|c| html! { <th>{ *c }</th> }) }
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for self.state.records.iter().map(|reservation| {
                        let id = reservation.id;
                        html! {
                            <tr key={id}>
                                { for reservation.cells(&self.state.lookups).into_iter().map(|c| html! { <td>{ c }</td> }) }
                                <td class="row-actions">
                                    <button class="btn-danger" onclick={link.callback(move |_| Msg::Cancel(id))}>
                                        {"Cancel"}
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        }
    }
}
