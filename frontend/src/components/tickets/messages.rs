use common::api::{ApiError, Created};
use common::model::Ticket;
use common::panel::{LoadTicket, PanelData};
use common::tickets::{Purchase, PurchaseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    List,
    Purchase,
    Payments,
    Refunds,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::List, Tab::Purchase, Tab::Payments, Tab::Refunds];

    pub fn title(self) -> &'static str {
        match self {
            Tab::List => "All tickets",
            Tab::Purchase => "Buy ticket",
            Tab::Payments => "Pending payments",
            Tab::Refunds => "Refunds",
        }
    }
}

pub enum Msg {
    Reload,
    Loaded(LoadTicket, Result<PanelData<Ticket>, ApiError>),
    SetTab(Tab),
    SetField(&'static str, String),
    Purchase,
    Purchased(Result<Purchase, PurchaseError>),
    Pay(i64),
    Paid(Result<Created, ApiError>),
    Refund(i64),
    Refunded(Result<(), ApiError>),
}
