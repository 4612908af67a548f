//! Passengers screen: the passenger panel plus the reservations sub-panel.
//!
//! A write in either panel changes the other (reservation counts, passenger
//! names in selects), so both report to this component and it reloads them
//! together by bumping a shared revision.

use common::model::Passenger;
use yew::prelude::*;

use crate::components::crud_panel::CrudPanel;
use crate::components::reservations::ReservationsPanel;
use crate::platform::Client;

#[derive(Properties, PartialEq)]
pub struct PassengersProps {
    pub client: Client,
}

pub enum Msg {
    Changed,
}

pub struct PassengersScreen {
    revision: u32,
}

impl Component for PassengersScreen {
    type Message = Msg;
    type Properties = PassengersProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { revision: 0 }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Changed => {
                self.revision = self.revision.wrapping_add(1);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let client = ctx.props().client.clone();
        let on_change = ctx.link().callback(|_| Msg::Changed);

        html! {
            <div class="passengers-screen">
                <CrudPanel<Passenger>
                    client={client.clone()}
                    title="Passengers"
                    revision={self.revision}
                    on_change={on_change.clone()}
                />
                <ReservationsPanel
                    {client}
                    title="Reservations"
                    revision={self.revision}
                    {on_change}
                />
            </div>
        }
    }
}
