//! # API Shared
//!
//! Shared definitions for Axiom APIs.
//!
//! Contains:
//! - Wire DTOs (`dto` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and `axiom-cli` so every surface renders verdicts the same way.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
