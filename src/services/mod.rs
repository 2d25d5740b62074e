//! Business logic for the dashboard view.

pub mod auth;
pub mod dashboard;
pub mod format;
