use yew::prelude::*;

/// Screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Overview,
    Flights,
    Passengers,
    Aircraft,
    Tickets,
}

impl Menu {
    pub const ALL: [Menu; 5] = [
        Menu::Overview,
        Menu::Flights,
        Menu::Passengers,
        Menu::Aircraft,
        Menu::Tickets,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Menu::Overview => "Overview",
            Menu::Flights => "Flights",
            Menu::Passengers => "Passengers",
            Menu::Aircraft => "Aircraft",
            Menu::Tickets => "Tickets",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Menu,
    pub username: String,
    pub on_select: Callback<Menu>,
    pub on_logout: Callback<()>,
}

pub struct Sidebar;

impl Component for Sidebar {
    type Message = ();
    type Properties = SidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Sidebar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_logout = props.on_logout.reform(|_: MouseEvent| ());

        html! {
            <nav class="sidebar">
                <div class="sidebar-brand">{"AirCrew"}</div>
                <ul class="sidebar-menu">
                    { for Menu::ALL.iter().map(|&menu| {
                        let on_select = props.on_select.reform(move |_: MouseEvent| menu);
                        html! {
                            <li
                                class={classes!("sidebar-item", (menu == props.active).then_some("active"))}
                                onclick={on_select}
                            >
                                { menu.title() }
                            </li>
                        }
                    }) }
                </ul>
                <div class="sidebar-footer">
                    <span class="sidebar-user">{ props.username.clone() }</span>
                    <button class="btn-logout" onclick={on_logout}>{"Log out"}</button>
                </div>
            </nav>
        }
    }
}
