//! HTTP surface of the dashboard host.
//!
//! - `GET /app-config`: the REST base the bundle must call.
//! - anything else: a file from the embedded bundle, or `index.html` so
//!   client-side screens survive a reload.

pub mod app_config;
pub mod assets;
