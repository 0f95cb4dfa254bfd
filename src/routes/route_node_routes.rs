use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, patch},
    Json, Router,
};

use super::{json_input, path_input};
use crate::controllers::RouteNodeController;
use crate::dto::ActionResult;
use crate::middleware::auth::BearerToken;
use crate::models::route_node::{
    ReplaceRouteNodesBody, RouteNode, RouteNodeTimingPatch, RouteNodesPayload,
};
use crate::state::AppState;

pub fn create_route_node_router() -> Router<AppState> {
    Router::new()
        .route(
            "/:shipment_id/route-nodes",
            get(get_route_nodes).put(replace_route_nodes),
        )
        .route(
            "/:shipment_id/route-nodes/:sequence",
            patch(patch_route_node_timing),
        )
}

// Los extractores van envueltos en Result: la acción responde siempre con
// ActionResult, también ante path o body inválidos.

async fn get_route_nodes(
    State(state): State<AppState>,
    token: BearerToken,
    shipment_id: Result<Path<String>, PathRejection>,
) -> Json<ActionResult<RouteNodesPayload>> {
    let controller = RouteNodeController::new(&state);
    Json(
        controller
            .get(token.as_deref(), path_input(shipment_id))
            .await,
    )
}

async fn replace_route_nodes(
    State(state): State<AppState>,
    token: BearerToken,
    shipment_id: Result<Path<String>, PathRejection>,
    body: Result<Json<ReplaceRouteNodesBody>, JsonRejection>,
) -> Json<ActionResult<RouteNodesPayload>> {
    let controller = RouteNodeController::new(&state);
    Json(
        controller
            .replace(token.as_deref(), path_input(shipment_id), json_input(body))
            .await,
    )
}

async fn patch_route_node_timing(
    State(state): State<AppState>,
    token: BearerToken,
    target: Result<Path<(String, u32)>, PathRejection>,
    body: Result<Json<RouteNodeTimingPatch>, JsonRejection>,
) -> Json<ActionResult<RouteNode>> {
    let controller = RouteNodeController::new(&state);
    Json(
        controller
            .patch_timing(token.as_deref(), path_input(target), json_input(body))
            .await,
    )
}
