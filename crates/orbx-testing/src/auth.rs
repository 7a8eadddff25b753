//! Bearer-token helpers for integration tests.
//!
//! Write endpoints expect `Authorization: Bearer <jwt>`. `MockAuth` signs a real
//! token with the test secret so requests pass through the same extractor as
//! production traffic.

use http::{HeaderMap, HeaderName, HeaderValue, header::AUTHORIZATION};

use orbx_auth_types::token::{JwtKeys, TokenIdentity, issue_token};
use orbx_domain::user::UserRole;

/// Secret shared by test state and the tokens minted here.
pub const TEST_JWT_SECRET: &str = "orbx-test-secret";

/// Configurable identity signed into test requests.
pub struct MockAuth {
    pub identity: TokenIdentity,
    pub keys: JwtKeys,
}

impl MockAuth {
    pub fn new(id: i32, role: UserRole) -> Self {
        Self {
            identity: TokenIdentity {
                id,
                email: format!("user{id}@example.com"),
                role,
            },
            keys: test_keys(),
        }
    }

    pub fn admin() -> Self {
        Self::new(1, UserRole::Admin)
    }

    pub fn user() -> Self {
        Self::new(2, UserRole::User)
    }

    /// Signed bearer token for this identity.
    pub fn token(&self) -> String {
        issue_token(&self.identity, &self.keys)
            .expect("sign test token")
            .token
    }

    /// `(authorization, "Bearer <jwt>")`, ready for `add_header`.
    pub fn bearer(&self) -> (HeaderName, HeaderValue) {
        let value = HeaderValue::from_str(&format!("Bearer {}", self.token()))
            .expect("bearer header value");
        (AUTHORIZATION, value)
    }

    pub fn headers(&self) -> HeaderMap {
        let (name, value) = self.bearer();
        let mut map = HeaderMap::new();
        map.insert(name, value);
        map
    }
}

/// Keys matching [`TEST_JWT_SECRET`] with a one-hour lifetime.
pub fn test_keys() -> JwtKeys {
    JwtKeys::new(TEST_JWT_SECRET, 3600)
}
