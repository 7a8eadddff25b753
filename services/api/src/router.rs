use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use orbx_core::health::healthz;
use orbx_core::middleware::{cors_layer, propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    auth::{login, register},
    city::{create_city, delete_city, get_city, list_cities, update_city},
    continent::{
        create_continent, delete_continent, get_continent, list_continents, update_continent,
    },
    country::{create_country, delete_country, get_country, list_countries, update_country},
    external::{country_info, images, weather},
    health::{banner, readyz},
    stats::dashboard,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(state.cors_allow_any_origin);

    let api = Router::new()
        // Continents
        .route("/continents", get(list_continents).post(create_continent))
        .route(
            "/continents/{id}",
            get(get_continent)
                .put(update_continent)
                .delete(delete_continent),
        )
        // Countries
        .route("/countries", get(list_countries).post(create_country))
        .route(
            "/countries/{id}",
            get(get_country).put(update_country).delete(delete_country),
        )
        // Cities
        .route("/cities", get(list_cities).post(create_city))
        .route(
            "/cities/{id}",
            get(get_city).put(update_city).delete(delete_city),
        )
        // Stats
        .route("/stats/dashboard", get(dashboard))
        // External providers
        .route("/external/country/{name}", get(country_info))
        .route("/external/weather", get(weather))
        .route("/external/images", get(images));

    Router::new()
        .route("/", get(banner))
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .nest("/api", api)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .layer(cors)
        .with_state(state)
}
