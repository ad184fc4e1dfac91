//! Health reporting for the demo API.
//!
//! This crate provides:
//! - `HealthStatus`, the record served by `GET /health`
//! - `HealthService`, the trait the HTTP layer depends on
//! - `StaticHealthService`, the implementation used in production

pub mod service;
pub mod status;

pub use service::{HealthService, StaticHealthService};
pub use status::{HealthStatus, SERVICE_VERSION, STATUS_UP};
