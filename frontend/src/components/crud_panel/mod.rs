//! Generic list/create/edit/delete screen for any [`Entity`].
//!
//! The component owns a [`PanelState`] and drives it from messages:
//! - first render issues the initial load;
//! - every successful write reloads, either directly or, when the parent
//!   passes `on_change`, by bumping the parent's `revision`;
//! - a new `revision` from the parent reloads as well.

use common::panel::Entity;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PanelProps;
pub use state::CrudPanel;

impl<E: Entity> Component for CrudPanel<E> {
    type Message = Msg<E>;
    type Properties = PanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CrudPanel::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.revision != old_props.revision || props.client != old_props.client {
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
