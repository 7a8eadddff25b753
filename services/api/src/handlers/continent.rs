use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use orbx_auth_types::identity::BearerIdentity;
use orbx_core::error::AppError;
use orbx_core::extract::ValidJson;
use orbx_core::serde::to_decimal_string;
use orbx_domain::population::Population;

use crate::domain::types::Continent;
use crate::gateway::EntityGateway;
use crate::gateway::normalize::ContinentPayload;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinentResponse {
    pub id: i32,
    pub name: String,
    pub area: f64,
    #[serde(serialize_with = "to_decimal_string")]
    pub population: Population,
    pub image_url: String,
}

impl From<Continent> for ContinentResponse {
    fn from(c: Continent) -> Self {
        Self {
            id: c.id,
            name: c.name,
            area: c.area,
            population: c.population,
            image_url: c.image_url,
        }
    }
}

// ── GET /api/continents ───────────────────────────────────────────────────────

pub async fn list_continents(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = EntityGateway::new(state.continent_repo()).list(()).await?;
    Ok(outcome.map(|rows| {
        rows.into_iter()
            .map(ContinentResponse::from)
            .collect::<Vec<_>>()
    }))
}

// ── GET /api/continents/{id} ──────────────────────────────────────────────────

pub async fn get_continent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = EntityGateway::new(state.continent_repo()).get(&id).await?;
    Ok(outcome.map(ContinentResponse::from))
}

// ── POST /api/continents ──────────────────────────────────────────────────────

pub async fn create_continent(
    State(state): State<AppState>,
    BearerIdentity(identity): BearerIdentity,
    ValidJson(payload): ValidJson<ContinentPayload>,
) -> Result<impl IntoResponse, AppError> {
    state.mutation_policy.authorize(&identity)?;
    let outcome = EntityGateway::new(state.continent_repo())
        .create(payload)
        .await?;
    Ok(outcome.map(ContinentResponse::from))
}

// ── PUT /api/continents/{id} ──────────────────────────────────────────────────

pub async fn update_continent(
    State(state): State<AppState>,
    BearerIdentity(identity): BearerIdentity,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<ContinentPayload>,
) -> Result<impl IntoResponse, AppError> {
    state.mutation_policy.authorize(&identity)?;
    let outcome = EntityGateway::new(state.continent_repo())
        .update(&id, payload)
        .await?;
    Ok(outcome.map(ContinentResponse::from))
}

// ── DELETE /api/continents/{id} ───────────────────────────────────────────────

pub async fn delete_continent(
    State(state): State<AppState>,
    BearerIdentity(identity): BearerIdentity,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.mutation_policy.authorize(&identity)?;
    let outcome = EntityGateway::new(state.continent_repo())
        .delete(&id)
        .await?;
    Ok(outcome.map(ContinentResponse::from))
}
