//! Auth types shared across OrbX crates.
//!
//! Provides JWT issuing and validation, the `BearerIdentity` extractor and the
//! mutation policy applied to write endpoints.

pub mod identity;
pub mod token;
