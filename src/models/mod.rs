//! Upstream payload schemas and the dashboard view model.

pub mod analytics;
pub mod approval;
pub mod dashboard;
pub mod user;
