use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use orbx_core::error::AppError;

use crate::domain::types::DashboardCounts;
use crate::state::AppState;
use crate::usecase::stats::DashboardUseCase;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub continents: u64,
    pub countries: u64,
    pub cities: u64,
    pub users: u64,
}

impl From<DashboardCounts> for DashboardResponse {
    fn from(c: DashboardCounts) -> Self {
        Self {
            continents: c.continents,
            countries: c.countries,
            cities: c.cities,
            users: c.users,
        }
    }
}

// ── GET /api/stats/dashboard ──────────────────────────────────────────────────

pub async fn dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let usecase = DashboardUseCase {
        continents: state.continent_repo(),
        countries: state.country_repo(),
        cities: state.city_repo(),
        users: state.user_repo(),
    };
    let counts = usecase.execute().await?;
    Ok(Json(DashboardResponse::from(counts)))
}
