//! Ticket, payment and reservation workflows.
//!
//! A purchase is two independent writes: the ticket, then a payment pointing
//! at it. The server offers no transaction spanning both, and nothing here
//! compensates when the second write fails; [`PurchaseError::Payment`] reports
//! the ticket that was left pending so the operator can pay or refund it.

use serde::Serialize;
use thiserror::Error;

use crate::api::{ApiClient, ApiError, Created, Resource, Transport};
use crate::model::{Ticket, TicketStatus};
use crate::panel::FormState;

pub const PAYMENT_METHODS: &[&str] = &["Kredi Kartı", "Nakit", "Banka Transferi"];
pub const DEFAULT_PAYMENT_METHOD: &str = "Kredi Kartı";

/// Price of a ticket booked from the reservations screen.
pub const RESERVATION_PRICE: i64 = 1000;

/// Body of `POST /tickets`. Missing numbers are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketRequest {
    pub yolcu_id: Option<i64>,
    pub ucus_id: Option<i64>,
    pub seat: Option<i64>,
    pub price: Option<i64>,
}

/// Body of `POST /payments`. The amount is taken from the ticket server-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    pub bilet_id: i64,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseForm {
    pub ticket: TicketRequest,
    pub method: String,
}

impl PurchaseForm {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            ticket: TicketRequest {
                yolcu_id: form.integer("yolcu_id"),
                ucus_id: form.integer("ucus_id"),
                seat: form.integer("seat"),
                price: form.integer("price"),
            },
            method: form.text("method"),
        }
    }
}

/// Reservation form: a ticket at the fixed [`RESERVATION_PRICE`].
pub fn reservation_request(form: &FormState) -> TicketRequest {
    TicketRequest {
        yolcu_id: form.integer("yolcu_id"),
        ucus_id: form.integer("ucus_id"),
        seat: form.integer("seat"),
        price: Some(RESERVATION_PRICE),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    pub ticket_id: i64,
    pub payment_id: i64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PurchaseError {
    #[error("ticket could not be created: {0}")]
    Ticket(#[source] ApiError),

    #[error("ticket {ticket_id} was created but its payment failed: {source}")]
    Payment {
        ticket_id: i64,
        #[source]
        source: ApiError,
    },
}

/// Creates the ticket, then pays for it.
pub async fn purchase<T: Transport + Clone>(
    client: &ApiClient<T>,
    form: &PurchaseForm,
) -> Result<Purchase, PurchaseError> {
    let ticket = client
        .create(Resource::Tickets, &form.ticket)
        .await
        .map_err(PurchaseError::Ticket)?;

    let payment = pay(client, ticket.id, &form.method)
        .await
        .map_err(|source| PurchaseError::Payment {
            ticket_id: ticket.id,
            source,
        })?;

    Ok(Purchase {
        ticket_id: ticket.id,
        payment_id: payment.id,
    })
}

/// Adds a payment for an existing ticket.
pub async fn pay<T: Transport + Clone>(
    client: &ApiClient<T>,
    ticket_id: i64,
    method: &str,
) -> Result<Created, ApiError> {
    client
        .create(
            Resource::Payments,
            &PaymentRequest {
                bilet_id: ticket_id,
                method: method.to_string(),
            },
        )
        .await
}

/// Refunds a ticket by deleting it; the server drops its payment with it.
pub async fn refund<T: Transport + Clone>(client: &ApiClient<T>, ticket_id: i64) -> Result<(), ApiError> {
    client.remove(Resource::Tickets, ticket_id).await?;
    Ok(())
}

pub async fn reserve<T: Transport + Clone>(client: &ApiClient<T>, request: &TicketRequest) -> Result<Created, ApiError> {
    client.create(Resource::Tickets, request).await
}

pub async fn cancel_reservation<T: Transport + Clone>(client: &ApiClient<T>, id: i64) -> Result<(), ApiError> {
    client.remove(Resource::Tickets, id).await?;
    Ok(())
}

/// Tickets that can be refunded: the paid ones.
pub fn refundable(tickets: &[Ticket]) -> impl Iterator<Item = &Ticket> {
    tickets.iter().filter(|t| t.status == TicketStatus::Paid)
}

/// Tickets still waiting for a payment.
pub fn payable(tickets: &[Ticket]) -> impl Iterator<Item = &Ticket> {
    tickets.iter().filter(|t| t.status == TicketStatus::Pending)
}
