//! sea-orm entities for the OrbX database.

pub mod cities;
pub mod continents;
pub mod countries;
pub mod users;
