use serde::{Deserialize, Serialize};

/// Base URL used when the host does not provide one.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Runtime configuration handed to the browser bundle by the dashboard host
/// (`GET /app-config`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root of the REST collaborator, without a trailing slash.
    pub api_base: String,
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slash() {
        assert_eq!(AppConfig::new("http://x/api/").api_base, "http://x/api");
    }

    #[test]
    fn deserializes_host_payload() {
        let config: AppConfig = serde_json::from_str(r#"{"api_base":"http://ops/api"}"#).unwrap();
        assert_eq!(config.api_base, "http://ops/api");
        assert_eq!(AppConfig::default().api_base, DEFAULT_API_BASE);
    }
}
