//! Message handling for [`TicketsPanel`].
//!
//! Every write ends in a reload of tickets, lookups and stats. The purchase is
//! the exception to "failure leaves state unchanged": when only its payment
//! step fails the ticket exists server-side, so the panel reloads to show it
//! as pending.

use common::api::ApiError;
use common::model::Ticket;
use common::panel::{self, Action, Entity};
use common::tickets::{self, PurchaseError, PurchaseForm};
use log::{error, info};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::TicketsPanel;
use crate::platform::{alert, confirm};

pub fn update(panel: &mut TicketsPanel, ctx: &Context<TicketsPanel>, msg: Msg) -> bool {
    match msg {
        Msg::Reload => {
            reload(panel, ctx);
            true
        }
        Msg::Loaded(ticket, result) => panel.state.finish_load(ticket, result),
        Msg::SetTab(tab) => {
            if panel.tab == tab {
                return false;
            }
            panel.tab = tab;
            true
        }
        Msg::SetField(name, value) => {
            panel.state.set_field(name, value);
            true
        }
        Msg::Purchase => {
            let form = PurchaseForm::from_form(&panel.state.form);
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Purchased(tickets::purchase(&client, &form).await));
            });
            false
        }
        Msg::Purchased(Ok(purchase)) => {
            info!(
                "ticket {} purchased with payment {}",
                purchase.ticket_id, purchase.payment_id
            );
            alert(&Action::Purchase.success(Ticket::NOUN));
            panel.state.complete_write();
            reload(panel, ctx);
            true
        }
        Msg::Purchased(Err(PurchaseError::Ticket(e))) => {
            error!("ticket creation failed: {}", e);
            alert(&Action::Purchase.failure(Ticket::NOUN));
            false
        }
        Msg::Purchased(Err(PurchaseError::Payment { ticket_id, source })) => {
            error!("payment for ticket {} failed: {}", ticket_id, source);
            alert(&format!(
                "Ticket #{} was created but its payment failed. It is waiting for payment.",
                ticket_id
            ));
            panel.state.complete_write();
            reload(panel, ctx);
            true
        }
        Msg::Pay(ticket_id) => {
            let method = panel.state.form.text("method");
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Paid(tickets::pay(&client, ticket_id, &method).await));
            });
            false
        }
        Msg::Paid(result) => finish(panel, ctx, Action::Pay, result.map(|_| ())),
        Msg::Refund(ticket_id) => {
            if let Some(question) = Action::Refund.confirmation(Ticket::NOUN) {
                if !confirm(&question) {
                    return false;
                }
            }
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Refunded(tickets::refund(&client, ticket_id).await));
            });
            false
        }
        Msg::Refunded(result) => finish(panel, ctx, Action::Refund, result),
    }
}

pub fn reload(panel: &mut TicketsPanel, ctx: &Context<TicketsPanel>) {
    let ticket = panel.state.begin_load();
    let client = ctx.props().client.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = panel::load::<Ticket, _>(&client).await;
        link.send_message(Msg::Loaded(ticket, result));
    });
}

fn finish(
    panel: &mut TicketsPanel,
    ctx: &Context<TicketsPanel>,
    action: Action,
    result: Result<(), ApiError>,
) -> bool {
    match result {
        Ok(()) => {
            alert(&action.success(Ticket::NOUN));
            reload(panel, ctx);
            true
        }
        Err(e) => {
            error!("{:?} failed: {}", action, e);
            alert(&action.failure(Ticket::NOUN));
            false
        }
    }
}
