//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde el frontend de la plataforma.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// CORS según configuración: sin orígenes definidos se permite todo
/// (solo para desarrollo)
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        log::warn!("⚠️ CORS_ORIGINS vacío, CORS permisivo");
        return CorsLayer::very_permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("⚠️ Origen CORS inválido ignorado: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(3600))
}
