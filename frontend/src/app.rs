//! Root component: loads the runtime config, restores the session, and shows
//! either the login form or the sidebar with the selected screen.

use common::config::AppConfig;
use common::model::{Aircraft, Flight};
use common::session::Session;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::crud_panel::CrudPanel;
use crate::components::login::LoginForm;
use crate::components::overview::Overview;
use crate::components::passengers::PassengersScreen;
use crate::components::sidebar::{Menu, Sidebar};
use crate::components::tickets::TicketsPanel;
use crate::platform::{fetch_app_config, Client, FetchTransport, LocalStorage};

pub enum Msg {
    ConfigLoaded(AppConfig),
    Select(Menu),
    LoggedIn(Session<LocalStorage>),
    Logout,
}

pub struct App {
    /// `None` until `/app-config` answered (or failed).
    client: Option<Client>,
    session: Session<LocalStorage>,
    active: Menu,
}

impl App {
    /// Client carrying the current session token.
    fn authorized_client(&self) -> Option<Client> {
        let client = self.client.as_ref()?;
        Some(client.with_token(self.session.token().map(str::to_string)))
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(fetch_app_config().await));
        });

        Self {
            client: None,
            session: Session::restore(LocalStorage),
            active: Menu::Overview,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                log::info!("using REST backend at {}", config.api_base);
                self.client = Some(Client::new(FetchTransport, &config));
                true
            }
            Msg::Select(menu) => {
                if self.active == menu {
                    return false;
                }
                self.active = menu;
                true
            }
            Msg::LoggedIn(session) => {
                self.session = session;
                self.active = Menu::Overview;
                true
            }
            Msg::Logout => {
                // The detached copy keeps the token for the request; the
                // screen switches to the login form right away.
                let mut detached = self.session.clone();
                self.session.clear();
                if let Some(client) = self.client.clone() {
                    spawn_local(async move { detached.logout(&client).await });
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let Some(client) = self.authorized_client() else {
            return html! { <div class="loading">{"Loading..."}</div> };
        };

        let Some(user) = self.session.user() else {
            return html! {
                <LoginForm client={client} on_login={link.callback(Msg::LoggedIn)} />
            };
        };

        let screen = match self.active {
            Menu::Overview => html! { <Overview client={client} /> },
            Menu::Flights => html! { <CrudPanel<Flight> client={client} title="Flights" /> },
            Menu::Passengers => html! { <PassengersScreen client={client} /> },
            Menu::Aircraft => html! { <CrudPanel<Aircraft> client={client} title="Aircraft" /> },
            Menu::Tickets => html! { <TicketsPanel client={client} title="Tickets" /> },
        };

        html! {
            <div class="layout">
                <Sidebar
                    active={self.active}
                    username={user.username.clone()}
                    on_select={link.callback(Msg::Select)}
                    on_logout={link.callback(|_| Msg::Logout)}
                />
                <main class="content">
                    { screen }
                </main>
            </div>
        }
    }
}
