//! REST client for the airline backend.
//!
//! One method per verb; every call is exactly one HTTP request against
//! `{base}/{resource}[/{id}]`. There is no caching, retrying or timeout.
//! Callers treat any `Err` as "the action failed".

mod error;
mod transport;

pub use error::ApiError;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AppConfig;
use crate::model::{LoginRequest, LoginResponse, Payment, Reservation, Stats};
use crate::panel::Entity;

/// Server-side collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Flights,
    Passengers,
    Aircraft,
    Tickets,
    Payments,
    Airports,
    Pilots,
    Stats,
    Reservations,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::Flights => "flights",
            Resource::Passengers => "passengers",
            Resource::Aircraft => "aircraft",
            Resource::Tickets => "tickets",
            Resource::Payments => "payments",
            Resource::Airports => "airports",
            Resource::Pilots => "pilots",
            Resource::Stats => "stats",
            Resource::Reservations => "reservations",
        }
    }
}

/// Reply to a `POST` that created a row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Created {
    pub id: i64,
    pub message: Option<String>,
}

/// Reply to `PUT`/`DELETE`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub message: Option<String>,
    pub success: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient<T> {
    transport: T,
    base: String,
    token: Option<String>,
}

impl<T: Transport + Clone> ApiClient<T> {
    pub fn new(transport: T, config: &AppConfig) -> Self {
        Self {
            transport,
            base: config.api_base.clone(),
            token: None,
        }
    }

    /// A copy of this client that attaches `token` to every request.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            transport: self.transport.clone(),
            base: self.base.clone(),
            token,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `GET /{resource}`
    pub async fn list<E: Entity>(&self) -> Result<Vec<E>, ApiError> {
        self.fetch(Method::Get, E::RESOURCE.path().to_string(), None).await
    }

    /// `GET /{resource}` for collections that are not panel entities
    /// (airports, pilots).
    pub async fn list_of<R: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<R>, ApiError> {
        self.fetch(Method::Get, resource.path().to_string(), None).await
    }

    /// `GET /{resource}/{id}`
    pub async fn get<E: Entity>(&self, id: i64) -> Result<E, ApiError> {
        self.fetch(Method::Get, format!("{}/{id}", E::RESOURCE.path()), None)
            .await
    }

    /// `POST /{resource}`
    pub async fn create<P: Serialize>(&self, resource: Resource, payload: &P) -> Result<Created, ApiError> {
        let body = serde_json::to_value(payload)?;
        self.fetch(Method::Post, resource.path().to_string(), Some(body))
            .await
    }

    /// `PUT /{resource}/{id}`, full-record replacement.
    pub async fn update<P: Serialize>(
        &self,
        resource: Resource,
        id: i64,
        payload: &P,
    ) -> Result<Message, ApiError> {
        let body = serde_json::to_value(payload)?;
        self.fetch(Method::Put, format!("{}/{id}", resource.path()), Some(body))
            .await
    }

    /// `DELETE /{resource}/{id}`
    pub async fn remove(&self, resource: Resource, id: i64) -> Result<Message, ApiError> {
        self.fetch(Method::Delete, format!("{}/{id}", resource.path()), None)
            .await
    }

    pub async fn stats(&self) -> Result<Stats, ApiError> {
        self.fetch(Method::Get, Resource::Stats.path().to_string(), None)
            .await
    }

    pub async fn payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.list_of(Resource::Payments).await
    }

    pub async fn reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.list::<Reservation>().await
    }

    /// `POST /login`
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_json::to_value(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;
        self.fetch(Method::Post, "login".to_string(), Some(body)).await
    }

    /// `POST /logout`
    pub async fn logout(&self) -> Result<Message, ApiError> {
        self.fetch(Method::Post, "logout".to_string(), None).await
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
    ) -> Result<R, ApiError> {
        let url = format!("{}/{}", self.base, path);
        debug!("{method} {url}");
        let response = self
            .transport
            .send(ApiRequest {
                method,
                url,
                body,
                token: self.token.clone(),
            })
            .await?;

        if !response.is_success() {
            return Err(ApiError::Server {
                status: response.status,
                message: server_message(&response.body),
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Pulls a human readable message out of an error body: the JSON `error` or
/// `message` field when present, the raw text otherwise.
fn server_message(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message"] {
            if let Some(Value::String(s)) = map.get(key) {
                return s.clone();
            }
        }
    }
    body.trim().to_string()
}
