//! Tickets screen: ticket list, purchase, payment of pending tickets and
//! refunds, over one [`PanelState<Ticket>`] whose lookups carry passengers,
//! flights and stats.

use common::model::Ticket;
use common::panel::PanelState;
use yew::prelude::*;

mod messages;
mod update;
mod view;

pub use messages::{Msg, Tab};

use crate::components::crud_panel::PanelProps;

pub struct TicketsPanel {
    pub state: PanelState<Ticket>,
    pub tab: Tab,
    pub loaded: bool,
}

impl Component for TicketsPanel {
    type Message = Msg;
    type Properties = PanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: PanelState::new(),
            tab: Tab::List,
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().client != old_props.client {
            update::reload(self, ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            update::reload(self, ctx);
        }
    }
}
