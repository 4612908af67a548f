use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Reply of `POST /login`.
///
/// A successful login carries `success: true` with the opaque token; a rejected
/// one usually arrives as a non-2xx status with only `error` set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub username: Option<String>,
    pub error: Option<String>,
}
