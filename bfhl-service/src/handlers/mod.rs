//! HTTP handlers for the bfhl service.

pub mod bfhl;
pub mod health;

pub use bfhl::bfhl;
pub use health::{health_check, metrics, not_found, readiness_check};
