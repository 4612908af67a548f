//! Browser implementations of the `common` seams: HTTP through `gloo-net`,
//! session persistence through `localStorage`, and the blocking
//! `alert`/`confirm` dialogs used for action feedback.

use common::api::{ApiClient, ApiError, ApiRequest, ApiResponse, Method, Transport};
use common::config::AppConfig;
use common::session::SessionStorage;
use gloo_net::http::Request;
use log::warn;

/// API client used by every component.
pub type Client = ApiClient<FetchTransport>;

/// Path on the dashboard host that serves [`AppConfig`].
const APP_CONFIG_PATH: &str = "/app-config";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if let Some(token) = &request.token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let sent = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

/// Fetches the runtime configuration from the host, falling back to the
/// default REST base when the bundle is served by something else.
pub async fn fetch_app_config() -> AppConfig {
    let response = match Request::get(APP_CONFIG_PATH).send().await {
        Ok(resp) if resp.ok() => resp,
        Ok(resp) => {
            warn!("app config returned {}, using defaults", resp.status());
            return AppConfig::default();
        }
        Err(e) => {
            warn!("app config unavailable ({}), using defaults", e);
            return AppConfig::default();
        }
    };

    match response.json::<AppConfig>().await {
        Ok(config) => AppConfig::new(config.api_base),
        Err(e) => {
            warn!("invalid app config ({}), using defaults", e);
            AppConfig::default()
        }
    }
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.set_item(key, value) {
                warn!("could not store {} ({:?})", key, e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(key) {
                warn!("could not remove {} ({:?})", key, e);
            }
        }
    }
}

/// Blocking modal message.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking yes/no question. Anything but an explicit "OK" counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
