//! # Routes
//!
//! Router assembly for the REST API.

use crate::api::rest::handlers::{
    AppState, calculate_freight, compare_promotions, generate_label, health, list_service_types,
};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the API router, mounted under `/api`.
///
/// Requests are traced through `tower-http`; CORS is open so the browser
/// client can be served from another origin.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/calcular-frete", post(calculate_freight))
        .route("/gerar-etiqueta", post(generate_label))
        .route("/aplicar-promocoes", post(compare_promotions))
        .route("/tipos-frete", get(list_service_types))
        .route("/health", get(health))
        .with_state(state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
