//! Authenticated operator session.
//!
//! The token and username survive page reloads through a [`SessionStorage`]
//! (browser `localStorage` in the app). [`Session::restore`] is the only way to
//! build a session, and [`Session::clear`] always wipes both storage and memory.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{info, warn};
use thiserror::Error;

use crate::api::{ApiClient, ApiError, Transport};

pub const TOKEN_KEY: &str = "auth_token";
pub const USERNAME_KEY: &str = "auth_username";

/// String key/value persistence.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local storage, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("username and password are required")]
    MissingCredentials,

    /// The server refused the credentials.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone)]
pub struct Session<S> {
    storage: S,
    user: Option<SessionUser>,
}

impl<S: SessionStorage> Session<S> {
    /// Rebuilds the session from storage. Both keys must be present.
    pub fn restore(storage: S) -> Self {
        let user = match (storage.get(TOKEN_KEY), storage.get(USERNAME_KEY)) {
            (Some(token), Some(username)) if !token.is_empty() => Some(SessionUser { token, username }),
            _ => None,
        };
        Self { storage, user }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Stores `user` in storage and memory.
    fn establish(&mut self, user: SessionUser) {
        self.storage.set(TOKEN_KEY, &user.token);
        self.storage.set(USERNAME_KEY, &user.username);
        info!("session started for {}", user.username);
        self.user = Some(user);
    }

    /// Forgets the session in storage and memory.
    pub fn clear(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USERNAME_KEY);
        self.user = None;
    }

    pub async fn login<T: Transport + Clone>(
        &mut self,
        client: &ApiClient<T>,
        username: &str,
        password: &str,
    ) -> Result<&SessionUser, SessionError> {
        let user = authenticate(client, username, password).await?;
        self.establish(user);
        self.user.as_ref().ok_or(SessionError::Rejected("Login failed".into()))
    }

    /// Tells the server, then clears local state regardless of the outcome.
    pub async fn logout<T: Transport + Clone>(&mut self, client: &ApiClient<T>) {
        let client = client.with_token(self.token().map(str::to_string));
        if let Err(e) = client.logout().await {
            warn!("logout request failed: {e}");
        }
        self.clear();
    }
}

/// Exchanges credentials for a token without touching any session.
pub async fn authenticate<T: Transport + Clone>(
    client: &ApiClient<T>,
    username: &str,
    password: &str,
) -> Result<SessionUser, SessionError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(SessionError::MissingCredentials);
    }

    let response = match client.login(username, password).await {
        Ok(response) => response,
        Err(ApiError::Server { message, .. }) => return Err(SessionError::Rejected(message)),
        Err(e) => return Err(e.into()),
    };

    match (response.success, response.token) {
        (true, Some(token)) => Ok(SessionUser {
            token,
            username: response.username.unwrap_or_else(|| username.to_string()),
        }),
        _ => Err(SessionError::Rejected(
            response.error.unwrap_or_else(|| "Login failed".to_string()),
        )),
    }
}
