use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use orbx_auth_types::identity::MutationPolicy;
use orbx_auth_types::token::JwtKeys;

use crate::infra::db::{
    DbCityRepository, DbContinentRepository, DbCountryRepository, DbUserRepository,
};
use crate::infra::external::HttpExternalData;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_keys: JwtKeys,
    pub mutation_policy: MutationPolicy,
    pub external: HttpExternalData,
    pub cors_allow_any_origin: bool,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_keys.clone()
    }
}

impl AppState {
    pub fn continent_repo(&self) -> DbContinentRepository {
        DbContinentRepository {
            db: self.db.clone(),
        }
    }

    pub fn country_repo(&self) -> DbCountryRepository {
        DbCountryRepository {
            db: self.db.clone(),
        }
    }

    pub fn city_repo(&self) -> DbCityRepository {
        DbCityRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }
}
