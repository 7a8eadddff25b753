//! Domain types shared across OrbX crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/`, `gateway/` and `domain/` layers.

pub mod entity;
pub mod population;
pub mod user;
