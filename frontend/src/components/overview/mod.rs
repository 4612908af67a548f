//! Overview screen: totals from `GET /stats`.

use common::api::ApiError;
use common::model::Stats;
use num_format::{Locale, ToFormattedString};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::platform::Client;

#[derive(Properties, PartialEq)]
pub struct OverviewProps {
    pub client: Client,
}

pub enum Msg {
    Loaded(Result<Stats, ApiError>),
}

pub struct Overview {
    stats: Option<Stats>,
    loaded: bool,
}

/// Revenue in whole lira with Turkish digit grouping, e.g. `₺12.500`.
pub fn format_revenue(amount: f64) -> String {
    format!("₺{}", (amount.round() as i64).to_formatted_string(&Locale::tr))
}

pub fn stat_card(label: &'static str, value: String) -> Html {
    html! {
        <div class="stat-card">
            <div class="stat-value">{ value }</div>
            <div class="stat-label">{ label }</div>
        </div>
    }
}

impl Component for Overview {
    type Message = Msg;
    type Properties = OverviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            stats: None,
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(stats)) => {
                self.stats = Some(stats);
                true
            }
            Msg::Loaded(Err(e)) => {
                log::warn!("error loading stats: {}", e);
                self.stats = Some(Stats::default());
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let Some(stats) = &self.stats else {
            return html! { <div class="loading">{"Loading..."}</div> };
        };

        html! {
            <section class="overview">
                <h2>{"Overview"}</h2>
                <div class="stat-grid">
                    { stat_card("Flights", stats.total_flights.to_string()) }
                    { stat_card("Passengers", stats.total_passengers.to_string()) }
                    { stat_card("Aircraft", stats.total_aircraft.to_string()) }
                    { stat_card("Tickets", stats.total_tickets.to_string()) }
                    { stat_card("Paid tickets", stats.paid_tickets.to_string()) }
                    { stat_card("Refunded tickets", stats.refunded_tickets.to_string()) }
                    { stat_card("Pending payments", stats.pending_payments().to_string()) }
                    { stat_card("Total revenue", format_revenue(stats.total_revenue)) }
                </div>
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(client.stats().await));
            });
        }
    }
}
