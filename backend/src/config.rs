//! Host configuration read from the environment.
//!
//! | Variable               | Default                     |
//! |------------------------|-----------------------------|
//! | `AIRCREW_HOST`         | `127.0.0.1`                 |
//! | `AIRCREW_PORT`         | `8080`                      |
//! | `AIRCREW_API_BASE`     | `http://localhost:5000/api` |
//! | `AIRCREW_OPEN_BROWSER` | `true`                      |

use common::config::{AppConfig, DEFAULT_API_BASE};
use log::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// REST base handed to the bundle through `/app-config`.
    pub api_base: String,
    pub open_browser: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_base: DEFAULT_API_BASE.to_string(),
            open_browser: true,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unparsable values fall back to
    /// the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match read("AIRCREW_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("AIRCREW_PORT={raw:?} is not a port, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let open_browser = match read("AIRCREW_OPEN_BROWSER").as_deref() {
            Some("1" | "true" | "yes" | "on") => true,
            Some("0" | "false" | "no" | "off") => false,
            Some(other) => {
                warn!("AIRCREW_OPEN_BROWSER={other:?} is not a boolean, using true");
                true
            }
            None => defaults.open_browser,
        };

        Self {
            host: read("AIRCREW_HOST").unwrap_or(defaults.host),
            port,
            api_base: read("AIRCREW_API_BASE").unwrap_or(defaults.api_base),
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig::new(self.api_base.clone())
    }
}
