//! Login form shown while no session is active.
//!
//! Signing in goes through [`Session::login`], which persists the token before
//! the parent adopts the session and swaps the form for the dashboard.

use common::session::{Session, SessionError};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::platform::{Client, LocalStorage};

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub client: Client,
    pub on_login: Callback<Session<LocalStorage>>,
}

pub enum Msg {
    SetUsername(String),
    SetPassword(String),
    Submit,
    Finished(Result<Session<LocalStorage>, SessionError>),
}

#[derive(Default)]
pub struct LoginForm {
    username: String,
    password: String,
    error: Option<String>,
    busy: bool,
}

/// Text shown under the form for a failed attempt.
fn error_text(error: &SessionError) -> String {
    match error {
        SessionError::MissingCredentials => "Username and password are required.".to_string(),
        SessionError::Rejected(message) => message.clone(),
        SessionError::Api(_) => "Something went wrong. Please try again.".to_string(),
    }
}

impl Component for LoginForm {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsername(value) => {
                self.username = value;
                false
            }
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                self.busy = true;
                self.error = None;

                let client = ctx.props().client.clone();
                let link = ctx.link().clone();
                let (username, password) = (self.username.clone(), self.password.clone());
                spawn_local(async move {
                    let mut session = Session::restore(LocalStorage);
                    let result = session.login(&client, &username, &password).await.map(|_| ());
                    link.send_message(Msg::Finished(result.map(|()| session)));
                });
                true
            }
            Msg::Finished(result) => {
                self.busy = false;
                match result {
                    Ok(session) => {
                        self.password.clear();
                        ctx.props().on_login.emit(session);
                    }
                    Err(e) => {
                        log::warn!("login failed: {}", e);
                        self.error = Some(error_text(&e));
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let on_username = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetUsername(input.value())
        });
        let on_password = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetPassword(input.value())
        });

        html! {
            <div class="login-page">
                <form class="login-form" {onsubmit}>
                    <h1>{"AirCrew Dashboard"}</h1>
                    <label class="form-field">
                        <span class="form-label">{"Username"}</span>
                        <input type="text" value={self.username.clone()} oninput={on_username} />
                    </label>
                    <label class="form-field">
                        <span class="form-label">{"Password"}</span>
                        <input type="password" value={self.password.clone()} oninput={on_password} />
                    </label>
                    if let Some(error) = &self.error {
                        <div class="login-error">{ error.clone() }</div>
                    }
                    <button type="submit" class="btn-primary" disabled={self.busy}>
                        { if self.busy { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
            </div>
        }
    }
}
