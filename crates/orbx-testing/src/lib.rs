//! Test utilities for OrbX services.
//!
//! Provides `MockAuth` for bearer headers and a JSON fixture loader.
//! Import from `[dev-dependencies]` only, never from production code.

pub mod auth;
pub mod fixture;
