use axum::{extract::State, http::StatusCode};

use orbx_core::health::readiness;

use crate::state::AppState;

/// `GET /` banner for humans and uptime checks.
pub async fn banner() -> &'static str {
    "OrbX Backend is running!"
}

/// `GET /readyz`: 200 once the database answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    readiness(state.db.ping().await)
}
