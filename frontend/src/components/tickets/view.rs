use common::model::{cell, Payment, Ticket};
use common::panel::{Entity, Field, Lookups};
use common::tickets::{payable, refundable};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{Msg, Tab};
use super::TicketsPanel;
use crate::components::form_fields::{field_input, field_list, FieldCallback};
use crate::components::overview::{format_revenue, stat_card};

pub fn view(panel: &TicketsPanel, ctx: &Context<TicketsPanel>) -> Html {
    let link = ctx.link();
    let title = ctx.props().title.clone();

    if panel.state.loading {
        return html! {
            <section class="panel">
                <h2>{ title }</h2>
                <div class="loading">{"Loading..."}</div>
            </section>
        };
    }

    let lookups = &panel.state.lookups;
    let body = match panel.tab {
        Tab::List => ticket_table(panel.state.records.iter(), lookups, None),
        Tab::Purchase => purchase_form(panel, link),
        Tab::Payments => payments(panel, link),
        Tab::Refunds => ticket_table(
            refundable(&panel.state.records),
            lookups,
            Some(("Refund", link.callback(Msg::Refund))),
        ),
    };

    html! {
        <section class="panel">
            <div class="panel-header">
                <h2>{ title }</h2>
                <button onclick={link.callback(|_| Msg::Reload)}>{"Refresh"}</button>
            </div>
            { summary(panel) }
            { tab_bar(panel, link) }
            { body }
        </section>
    }
}

fn summary(panel: &TicketsPanel) -> Html {
    let stats = &panel.state.lookups.stats;
    html! {
        <div class="stat-grid">
            { stat_card("Tickets", stats.total_tickets.to_string()) }
            { stat_card("Paid", stats.paid_tickets.to_string()) }
            { stat_card("Pending payments", stats.pending_payments().to_string()) }
            { stat_card("Refunded", stats.refunded_tickets.to_string()) }
            { stat_card("Revenue", format_revenue(stats.total_revenue)) }
        </div>
    }
}

fn tab_bar(panel: &TicketsPanel, link: &Scope<TicketsPanel>) -> Html {
    html! {
        <div class="tab-bar">
            { for Tab::ALL.iter().map(|&tab| html! {
                <button
                    class={classes!("tab-btn", (tab == panel.tab).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetTab(tab))}
                >
                    { tab.title() }
                </button>
            }) }
        </div>
    }
}

fn field_callback(link: &Scope<TicketsPanel>) -> FieldCallback {
    link.callback(|(name, value): (&'static str, String)| Msg::SetField(name, value))
}

fn purchase_form(panel: &TicketsPanel, link: &Scope<TicketsPanel>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Purchase
    });

    html! {
        <form class="panel-form" {onsubmit}>
            { field_list(Ticket::FIELDS, &panel.state.form, &panel.state.lookups, &field_callback(link)) }
            <div class="form-actions">
                <button type="submit" class="btn-primary">{"Buy ticket"}</button>
            </div>
        </form>
    }
}

/// Pending tickets, the method their payment will use, and the payments
/// received so far.
fn payments(panel: &TicketsPanel, link: &Scope<TicketsPanel>) -> Html {
    let method = Ticket::FIELDS.iter().find(|f| f.name == "method");
    let picker = method.map(|field: &Field| {
        field_input(
            field,
            panel.state.form.get(field.name),
            &panel.state.lookups,
            &field_callback(link),
        )
    });

    html! {
        <>
            { for picker }
            { ticket_table(payable(&panel.state.records), &panel.state.lookups, Some(("Pay", link.callback(Msg::Pay)))) }
            <h3>{"Payment history"}</h3>
            { payment_table(&panel.state.lookups.payments) }
        </>
    }
}

/// Ticket rows with an optional per-row action button.
fn ticket_table<'a>(
    tickets: impl Iterator<Item = &'a Ticket>,
    lookups: &Lookups,
    action: Option<(&'static str, Callback<i64>)>,
) -> Html {
    let rows: Vec<Html> = tickets
        .map(|ticket| {
            let id = ticket.id;
            let button = action.as_ref().map(|(label, on_click)| {
                let onclick = on_click.reform(move |_: MouseEvent| id);
                html! { <button {onclick}>{ *label }</button> }
            });
            html! {
                <tr key={id}>
                    { for ticket.cells(lookups).into_iter().map(|c| html! { <td>{ c }</td> }) }
                    if action.is_some() {
                        <td class="row-actions">{ for button }</td>
                    }
                </tr>
            }
        })
        .collect();

    if rows.is_empty() {
        return html! { <p class="empty">{"No tickets."}</p> };
    }

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    { for Ticket::COLUMNS.iter().map(|c| html! { <th>{ *c }</th> }) }
                    if action.is_some() {
                        <th>{"Actions"}</th>
                    }
                </tr>
            </thead>
            <tbody>{ for rows }</tbody>
        </table>
    }
}

fn payment_table(payments: &[Payment]) -> Html {
    if payments.is_empty() {
        return html! { <p class="empty">{"No payments."}</p> };
    }

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"Payment"}</th>
                    <th>{"Ticket"}</th>
                    <th>{"Passenger"}</th>
                    <th>{"Flight"}</th>
                    <th>{"Method"}</th>
                    <th>{"Amount"}</th>
                    <th>{"Date"}</th>
                </tr>
            </thead>
            <tbody>
                { for payments.iter().map(|p| html! {
                    <tr key={p.id}>
                        <td>{ format!("#{}", p.id) }</td>
                        <td>{ format!("#{}", p.bilet_id) }</td>
                        <td>{ cell(&p.passenger_name) }</td>
                        <td>{ cell(&p.flight_code) }</td>
                        <td>{ p.method.clone() }</td>
                        <td>{ p.amount.map(format_revenue).unwrap_or_else(|| "-".to_string()) }</td>
                        <td>{ cell(&p.payment_date) }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
