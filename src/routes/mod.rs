pub mod route_node_routes;
pub mod site_routes;
pub mod user_routes;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors::cors_layer;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError, AppResult};

/// Router principal de la plataforma
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .nest("/api/shipments", route_node_routes::create_route_node_router())
        .nest("/api", user_routes::create_user_router())
        .nest("/api/site", site_routes::create_site_router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "af-platform",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Path extraído, o el rechazo de axum como error de la acción
pub(crate) fn path_input<T>(path: Result<Path<T>, PathRejection>) -> AppResult<T> {
    path.map(|Path(value)| value)
        .map_err(|rejection| bad_request_error(&format!("Invalid path: {}", rejection.body_text())))
}

/// Body JSON extraído, o el rechazo de axum como error de la acción
pub(crate) fn json_input<T>(body: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    body.map(|Json(value)| value).map_err(|rejection| {
        bad_request_error(&format!("Invalid request body: {}", rejection.body_text()))
    })
}
