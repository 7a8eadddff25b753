use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;

use orbx_core::error::AppError;
use orbx_core::extract::ValidQuery;

use crate::domain::repository::ExternalDataPort;
use crate::gateway::normalize::{LATITUDE_BOUND, LONGITUDE_BOUND, RawField, coordinate};
use crate::state::AppState;

// ── GET /api/external/country/{name} ──────────────────────────────────────────

pub async fn country_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("country name required"));
    }
    let body = state.external.country_by_name(name).await?;
    Ok(Json(body))
}

// ── GET /api/external/weather ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

pub async fn weather(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<WeatherQuery>,
) -> Result<impl IntoResponse, AppError> {
    let latitude = coordinate(query.lat.map(RawField::Text), LATITUDE_BOUND)?;
    let longitude = coordinate(query.lon.map(RawField::Text), LONGITUDE_BOUND)?;
    let body = state.external.weather(latitude, longitude).await?;
    Ok(Json(body))
}

// ── GET /api/external/images ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub query: Option<String>,
}

pub async fn images(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ImageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let keyword = query
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::validation("query required"))?;
    let body = state.external.search_images(keyword).await?;
    Ok(Json(body))
}
