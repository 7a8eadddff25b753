//! Service plumbing shared by OrbX crates: error taxonomy, extractors,
//! health checks, tracing and middleware.

pub mod config;
pub mod error;
pub mod extract;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
