#![allow(dead_code)]

use af_platform::config::EnvironmentConfig;
use af_platform::models::auth::PlatformRole;
use af_platform::models::route_node::{
    NodeRole, RouteNode, RouteNodeEnvelope, RouteNodeTimingPatch, RouteNodesPayload,
};
use af_platform::repositories::{InMemoryUserDirectory, UserDirectory};
use af_platform::utils::jwt::{generate_token, JwtConfig};
use af_platform::{create_router, AppState};
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const JWT_SECRET: &str = "integration-secret";

/// Embarque que siempre responde 500 sin cuerpo JSON
pub const BROKEN_SHIPMENT: &str = "AF-BROKEN";

// Servicio de embarques falso: rutas en memoria por id de embarque
#[derive(Clone, Default)]
pub struct FakeShipments {
    routes: Arc<Mutex<HashMap<String, RouteNodesPayload>>>,
}

impl FakeShipments {
    pub fn insert(&self, shipment_id: &str, payload: RouteNodesPayload) {
        self.routes
            .lock()
            .unwrap()
            .insert(shipment_id.to_string(), payload);
    }

    pub fn get(&self, shipment_id: &str) -> Option<RouteNodesPayload> {
        self.routes.lock().unwrap().get(shipment_id).cloned()
    }
}

fn has_bearer(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map_or(false, |v| v.starts_with("Bearer ") && v.len() > 7)
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn fake_get(
    State(fake): State<FakeShipments>,
    headers: HeaderMap,
    Path(shipment_id): Path<String>,
) -> Response {
    if !has_bearer(&headers) {
        return detail(StatusCode::UNAUTHORIZED, "Missing credentials");
    }
    if shipment_id == BROKEN_SHIPMENT {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    match fake.get(&shipment_id) {
        Some(payload) => Json(payload).into_response(),
        None => detail(
            StatusCode::NOT_FOUND,
            &format!("Shipment {} not found", shipment_id),
        ),
    }
}

async fn fake_put(
    State(fake): State<FakeShipments>,
    headers: HeaderMap,
    Path(shipment_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !has_bearer(&headers) {
        return detail(StatusCode::UNAUTHORIZED, "Missing credentials");
    }
    let nodes: Vec<RouteNode> = match serde_json::from_value(body["route_nodes"].clone()) {
        Ok(nodes) => nodes,
        Err(e) => return detail(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };
    let payload = RouteNodesPayload {
        route_nodes: nodes,
        derived: false,
    };
    fake.insert(&shipment_id, payload.clone());
    Json(payload).into_response()
}

async fn fake_patch(
    State(fake): State<FakeShipments>,
    headers: HeaderMap,
    Path((shipment_id, sequence)): Path<(String, u32)>,
    Json(patch): Json<RouteNodeTimingPatch>,
) -> Response {
    if !has_bearer(&headers) {
        return detail(StatusCode::UNAUTHORIZED, "Missing credentials");
    }
    let mut routes = fake.routes.lock().unwrap();
    let Some(payload) = routes.get_mut(&shipment_id) else {
        return detail(
            StatusCode::NOT_FOUND,
            &format!("Shipment {} not found", shipment_id),
        );
    };
    let Some(node) = payload
        .route_nodes
        .iter_mut()
        .find(|n| n.sequence == sequence)
    else {
        return detail(
            StatusCode::NOT_FOUND,
            &format!("Route node {} not found", sequence),
        );
    };
    apply_patch(&patch, node);
    Json(RouteNodeEnvelope { node: node.clone() }).into_response()
}

/// Aplicar un parche de tiempos como lo hace el servicio de embarques:
/// los campos ausentes no se tocan
pub fn apply_patch(patch: &RouteNodeTimingPatch, node: &mut RouteNode) {
    if let Some(value) = patch.scheduled_eta {
        node.scheduled_eta = Some(value);
    }
    if let Some(value) = patch.actual_eta {
        node.actual_eta = Some(value);
    }
    if let Some(value) = patch.scheduled_etd {
        node.scheduled_etd = Some(value);
    }
    if let Some(value) = patch.actual_etd {
        node.actual_etd = Some(value);
    }
}

/// Levantar el servicio falso en un puerto libre
pub async fn spawn_fake_shipment_service(fake: FakeShipments) -> String {
    let app = Router::new()
        .route(
            "/api/v2/shipments/:shipment_id/route-nodes",
            get(fake_get).put(fake_put),
        )
        .route(
            "/api/v2/shipments/:shipment_id/route-nodes/:sequence",
            patch(fake_patch),
        )
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

pub fn test_config(shipment_api_url: &str) -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        jwt_secret: JWT_SECRET.to_string(),
        jwt_expiration: 600,
        cors_origins: vec![],
        database_url: "postgres://unused".to_string(),
        shipment_api_url: shipment_api_url.to_string(),
        shipment_api_timeout_secs: 5,
    }
}

pub fn create_test_app(shipment_api_url: &str, directory: Arc<dyn UserDirectory>) -> Router {
    let state = AppState::new(test_config(shipment_api_url), directory).unwrap();
    create_router(state)
}

pub fn create_route_test_app(shipment_api_url: &str) -> Router {
    create_test_app(shipment_api_url, Arc::new(InMemoryUserDirectory::default()))
}

pub fn token_for(uid: &str, role: PlatformRole) -> String {
    let config = JwtConfig {
        secret: JWT_SECRET.to_string(),
        expiration: 600,
    };
    generate_token(uid, role, None, &config).unwrap()
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub fn node(code: &str, name: &str, sequence: u32, role: NodeRole) -> RouteNode {
    RouteNode {
        port_un_code: code.to_string(),
        port_name: name.to_string(),
        sequence,
        role,
        scheduled_eta: None,
        actual_eta: None,
        scheduled_etd: None,
        actual_etd: None,
    }
}

/// Ruta Port Klang -> Singapur -> Rotterdam con tiempos planificados
pub fn sample_route() -> Vec<RouteNode> {
    let mut origin = node("MYPKG", "Port Klang", 1, NodeRole::Origin);
    origin.scheduled_etd = Some(Utc.with_ymd_and_hms(2026, 11, 2, 10, 0, 0).unwrap());
    origin.actual_etd = Some(Utc.with_ymd_and_hms(2026, 11, 2, 14, 30, 0).unwrap());

    let mut tranship = node("SGSIN", "Singapore", 2, NodeRole::Tranship);
    tranship.scheduled_eta = Some(Utc.with_ymd_and_hms(2026, 11, 3, 6, 0, 0).unwrap());
    tranship.scheduled_etd = Some(Utc.with_ymd_and_hms(2026, 11, 5, 18, 0, 0).unwrap());

    let mut destination = node("NLRTM", "Rotterdam", 3, NodeRole::Destination);
    destination.scheduled_eta = Some(Utc.with_ymd_and_hms(2026, 12, 1, 8, 0, 0).unwrap());

    vec![origin, tranship, destination]
}
