//! Request extractors for session identity and role checks.

pub mod auth;
pub mod rbac;
