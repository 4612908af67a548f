//! Shared core of the AirCrew dashboard.
//!
//! Everything in this crate is platform neutral: it compiles for the browser
//! (`frontend`) and natively (tests). The HTTP layer is reached only through the
//! [`api::Transport`] trait, so the panels, ticket workflows and session logic
//! can be exercised against an in-memory server.

pub mod api;
pub mod config;
pub mod model;
pub mod panel;
pub mod session;
pub mod tickets;

#[cfg(test)]
pub(crate) mod testing;
