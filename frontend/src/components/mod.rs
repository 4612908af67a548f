//! Yew components of the dashboard.

pub mod crud_panel;
pub mod form_fields;
pub mod login;
pub mod overview;
pub mod passengers;
pub mod reservations;
pub mod sidebar;
pub mod tickets;
