//! Properties shared by the panels that load through a [`Client`].

use yew::prelude::*;

use crate::platform::Client;

#[derive(Properties, PartialEq, Clone)]
pub struct PanelProps {
    /// Client carrying the session token.
    pub client: Client,

    /// Heading shown above the panel.
    #[prop_or_default]
    pub title: AttrValue,

    /// Bumped by the parent to force a reload.
    #[prop_or_default]
    pub revision: u32,

    /// Called after a successful write instead of reloading locally. The
    /// parent is expected to bump `revision` of every panel it hosts.
    #[prop_or_default]
    pub on_change: Option<Callback<()>>,
}
