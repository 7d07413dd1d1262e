use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::web::handlers::{
    api_categories, api_charts, api_distribution, api_map, api_records, health, index, showcase,
};
use crate::web::state::AppState;

pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/", get(index))
        .route("/showcase", get(showcase))
        .route("/api/records", get(api_records))
        .route("/api/distribution", get(api_distribution))
        .route("/api/categories", get(api_categories))
        .route("/api/map", get(api_map))
        .route("/api/charts", get(api_charts))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
