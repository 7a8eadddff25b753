//! Entity kinds used to label persistence outcomes.

use std::fmt;

/// The entities the backend persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Continent,
    Country,
    City,
    User,
}

impl EntityKind {
    /// Lowercase singular noun, used in client-facing messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Continent => "continent",
            Self::Country => "country",
            Self::City => "city",
            Self::User => "user",
        }
    }

    /// Describes the unique key of the entity, e.g. "this ISO code".
    pub fn unique_key(self) -> &'static str {
        match self {
            Self::Continent => "this name",
            Self::Country => "this ISO code",
            Self::City => "this name in the same country",
            Self::User => "this email",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}
