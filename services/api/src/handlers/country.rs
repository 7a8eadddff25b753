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

use crate::domain::types::{Country, CountryFilter};
use crate::gateway::EntityGateway;
use crate::gateway::normalize::CountryPayload;
use crate::handlers::continent::ContinentResponse;
use crate::handlers::parse_filter;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponse {
    pub id: i32,
    pub name: String,
    pub iso_code: String,
    pub capital: String,
    #[serde(serialize_with = "to_decimal_string")]
    pub population: Population,
    pub area: Option<f64>,
    pub language: String,
    pub currency: String,
    pub calling_code: String,
    pub image_url: String,
    pub continent_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent: Option<ContinentResponse>,
}

impl From<Country> for CountryResponse {
    fn from(c: Country) -> Self {
        Self {
            id: c.id,
            name: c.name,
            iso_code: c.iso_code,
            capital: c.capital,
            population: c.population,
            area: c.area,
            language: c.language,
            currency: c.currency,
            calling_code: c.calling_code,
            image_url: c.image_url,
            continent_id: c.continent_id,
            continent: c.continent.map(ContinentResponse::from),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CountryListQuery {
    pub continent: Option<String>,
}

// ── GET /api/countries ────────────────────────────────────────────────────────

pub async fn list_countries(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<CountryListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = CountryFilter {
        continent_id: parse_filter(query.continent, "continent")?,
    };
    let outcome = EntityGateway::new(state.country_repo()).list(filter).await?;
    Ok(outcome.map(|rows| rows.into_iter().map(CountryResponse::from).collect::<Vec<_>>()))
}

// ── GET /api/countries/{id} ───────────────────────────────────────────────────

pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = EntityGateway::new(state.country_repo()).get(&id).await?;
    Ok(outcome.map(CountryResponse::from))
}

// ── POST /api/countries ───────────────────────────────────────────────────────

pub async fn create_country(
    State(state): State<AppState>,
    BearerIdentity(identity): BearerIdentity,
    ValidJson(payload): ValidJson<CountryPayload>,
) -> Result<impl IntoResponse, AppError> {
    state.mutation_policy.authorize(&identity)?;
    let outcome = EntityGateway::new(state.country_repo())
        .create(payload)
        .await?;
    Ok(outcome.map(CountryResponse::from))
}

// ── PUT /api/countries/{id} ───────────────────────────────────────────────────

pub async fn update_country(
    State(state): State<AppState>,
    BearerIdentity(identity): BearerIdentity,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<CountryPayload>,
) -> Result<impl IntoResponse, AppError> {
    state.mutation_policy.authorize(&identity)?;
    let outcome = EntityGateway::new(state.country_repo())
        .update(&id, payload)
        .await?;
    Ok(outcome.map(CountryResponse::from))
}

// ── DELETE /api/countries/{id} ────────────────────────────────────────────────

pub async fn delete_country(
    State(state): State<AppState>,
    BearerIdentity(identity): BearerIdentity,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.mutation_policy.authorize(&identity)?;
    let outcome = EntityGateway::new(state.country_repo()).delete(&id).await?;
    Ok(outcome.map(CountryResponse::from))
}
