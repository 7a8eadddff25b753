#![allow(async_fn_in_trait)]

use serde_json::Value;

use orbx_domain::entity::EntityKind;

use crate::domain::types::{NewUser, User};
use crate::error::{ExternalError, StoreError};

/// Persistence contract shared by every geographic entity.
///
/// Each call is one logical persistence operation. Failures are tagged so the
/// gateway can classify them without inspecting driver errors.
pub trait EntityRepository: Send + Sync {
    const KIND: EntityKind;

    type Record: Send;
    type Draft: Send;
    type Filter: Send;

    /// Rows matching `filter`, ordered by name ascending, parents attached.
    async fn find_many(&self, filter: Self::Filter) -> Result<Vec<Self::Record>, StoreError>;

    async fn find_unique(&self, id: i32) -> Result<Option<Self::Record>, StoreError>;

    async fn create(&self, draft: Self::Draft) -> Result<Self::Record, StoreError>;

    /// Full replace of the mutable fields. `NotFound` when `id` does not exist.
    async fn update(&self, id: i32, draft: Self::Draft) -> Result<Self::Record, StoreError>;

    /// `NotFound` when `id` does not exist, `ReferenceViolation` when dependents remain.
    async fn delete(&self, id: i32) -> Result<(), StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

/// Repository for registered accounts.
pub trait UserRepository: Send + Sync {
    /// Lookup by normalized (trimmed, lower-cased) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// `UniqueViolation` when the email is taken.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

/// Outbound data providers. Successful calls return provider JSON unmodified.
pub trait ExternalDataPort: Send + Sync {
    /// First country whose name matches.
    async fn country_by_name(&self, name: &str) -> Result<Value, ExternalError>;

    /// Current weather in metric units.
    async fn weather(&self, latitude: f64, longitude: f64) -> Result<Value, ExternalError>;

    async fn search_images(&self, query: &str) -> Result<Value, ExternalError>;
}
