use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use orbx_auth_types::identity::BearerIdentity;
use orbx_core::error::AppError;
use orbx_core::extract::{ValidJson, ValidQuery};
use orbx_core::serde::to_decimal_string;
use orbx_domain::population::Population;

use crate::domain::types::{City, CityFilter};
use crate::gateway::EntityGateway;
use crate::gateway::normalize::CityPayload;
use crate::handlers::country::CountryResponse;
use crate::handlers::parse_filter;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityResponse {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(serialize_with = "to_decimal_string")]
    pub population: Population,
    pub area: Option<f64>,
    pub timezone: String,
    pub language: String,
    pub image_url: String,
    pub country_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryResponse>,
}

impl From<City> for CityResponse {
    fn from(c: City) -> Self {
        Self {
            id: c.id,
            name: c.name,
            latitude: c.latitude,
            longitude: c.longitude,
            population: c.population,
            area: c.area,
            timezone: c.timezone,
            language: c.language,
            image_url: c.image_url,
            country_id: c.country_id,
            country: c.country.map(CountryResponse::from),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CityListQuery {
    pub country: Option<String>,
    pub continent: Option<String>,
}

// ── GET /api/cities ───────────────────────────────────────────────────────────

pub async fn list_cities(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<CityListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = CityFilter::from_ids(
        parse_filter(query.country, "country")?,
        parse_filter(query.continent, "continent")?,
    );
    let outcome = EntityGateway::new(state.city_repo()).list(filter).await?;
    Ok(outcome.map(|rows| rows.into_iter().map(CityResponse::from).collect::<Vec<_>>()))
}

// ── GET /api/cities/{id} ──────────────────────────────────────────────────────

pub async fn get_city(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = EntityGateway::new(state.city_repo()).get(&id).await?;
    Ok(outcome.map(CityResponse::from))
}

// ── POST /api/cities ──────────────────────────────────────────────────────────

pub async fn create_city(
    State(state): State<AppState>,
    BearerIdentity(identity): BearerIdentity,
    ValidJson(payload): ValidJson<CityPayload>,
) -> Result<impl IntoResponse, AppError> {
    state.mutation_policy.authorize(&identity)?;
    let outcome = EntityGateway::new(state.city_repo()).create(payload).await?;
    Ok(outcome.map(CityResponse::from))
}

// ── PUT /api/cities/{id} ──────────────────────────────────────────────────────

pub async fn update_city(
    State(state): State<AppState>,
    BearerIdentity(identity): BearerIdentity,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<CityPayload>,
) -> Result<impl IntoResponse, AppError> {
    state.mutation_policy.authorize(&identity)?;
    let outcome = EntityGateway::new(state.city_repo())
        .update(&id, payload)
        .await?;
    Ok(outcome.map(CityResponse::from))
}

// ── DELETE /api/cities/{id} ───────────────────────────────────────────────────

pub async fn delete_city(
    State(state): State<AppState>,
    BearerIdentity(identity): BearerIdentity,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.mutation_policy.authorize(&identity)?;
    let outcome = EntityGateway::new(state.city_repo()).delete(&id).await?;
    Ok(outcome.map(CityResponse::from))
}
