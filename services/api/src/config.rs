use std::time::Duration;

use serde::Deserialize;

use orbx_auth_types::identity::MutationPolicy;
use orbx_auth_types::token::ACCESS_TOKEN_TTL;
use orbx_core::config::Config;
use orbx_core::tracing::LogFormat;

/// API service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing access tokens.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3001). Env var: `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Access-token lifetime in seconds. Env var: `JWT_TTL_SECS`.
    #[serde(default = "default_jwt_ttl_secs")]
    pub jwt_ttl_secs: u64,
    /// `admin` (default) or `authenticated`. Env var: `MUTATION_POLICY`.
    #[serde(default)]
    pub mutation_policy: MutationPolicy,
    pub openweathermap_api_key: Option<String>,
    pub unsplash_access_key: Option<String>,
    #[serde(default = "default_rest_countries_url")]
    pub rest_countries_url: String,
    #[serde(default = "default_openweathermap_url")]
    pub openweathermap_url: String,
    #[serde(default = "default_unsplash_url")]
    pub unsplash_url: String,
    /// Transport timeout for every outbound provider call.
    #[serde(default = "default_external_timeout_secs")]
    pub external_timeout_secs: u64,
    #[serde(default = "default_cors_allow_any_origin")]
    pub cors_allow_any_origin: bool,
    /// `json` (default) or `pretty`. Env var: `LOG_FORMAT`.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config for ApiConfig {}

impl ApiConfig {
    pub fn external_timeout(&self) -> Duration {
        Duration::from_secs(self.external_timeout_secs)
    }
}

fn default_port() -> u16 {
    3001
}

fn default_jwt_ttl_secs() -> u64 {
    ACCESS_TOKEN_TTL
}

fn default_rest_countries_url() -> String {
    "https://restcountries.com/v3.1".to_owned()
}

fn default_openweathermap_url() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_owned()
}

fn default_unsplash_url() -> String {
    "https://api.unsplash.com".to_owned()
}

fn default_external_timeout_secs() -> u64 {
    10
}

fn default_cors_allow_any_origin() -> bool {
    true
}
