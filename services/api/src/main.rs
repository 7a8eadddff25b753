use sea_orm::Database;
use tracing::info;

use orbx_api::config::ApiConfig;
use orbx_api::infra::external::{ExternalEndpoints, HttpExternalData};
use orbx_api::router::build_router;
use orbx_api::state::AppState;
use orbx_auth_types::token::JwtKeys;
use orbx_core::config::Config;
use orbx_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    let config = ApiConfig::from_env();
    init_tracing("info,sqlx=warn", config.log_format);

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let external = HttpExternalData::new(
        ExternalEndpoints {
            rest_countries_url: config.rest_countries_url.clone(),
            openweathermap_url: config.openweathermap_url.clone(),
            openweathermap_api_key: config.openweathermap_api_key.clone(),
            unsplash_url: config.unsplash_url.clone(),
            unsplash_access_key: config.unsplash_access_key.clone(),
        },
        config.external_timeout(),
    )
    .expect("failed to build HTTP client");

    let state = AppState {
        db,
        jwt_keys: JwtKeys::new(config.jwt_secret.as_str(), config.jwt_ttl_secs),
        mutation_policy: config.mutation_policy,
        external,
        cors_allow_any_origin: config.cors_allow_any_origin,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(policy = ?config.mutation_policy, "api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
