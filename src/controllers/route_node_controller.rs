use crate::clients::ShipmentClientError;
use crate::dto::ActionResult;
use crate::models::auth::{PlatformRole, SessionClaims};
use crate::models::route_node::{
    ReplaceRouteNodesBody, RouteNode, RouteNodeTimingPatch, RouteNodesPayload,
};
use crate::services::{validate_route_nodes, ROUTE_NODE_READ_ROLES, ROUTE_NODE_WRITE_ROLES};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_not_empty;

/// Acciones sobre los route nodes de un embarque.
///
/// Cada acción verifica sesión y rol, valida la entrada y delega en el
/// servicio de embarques. Los fallos vuelven como `ActionResult`, incluida
/// la entrada que el router no pudo extraer: llega como `Err` y solo se
/// revisa después de la sesión.
pub struct RouteNodeController<'a> {
    state: &'a AppState,
}

impl<'a> RouteNodeController<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Sesión válida con rol permitido, junto con la credencial a reenviar
    async fn authorize<'t>(
        &self,
        token: Option<&'t str>,
        allowed_roles: &[PlatformRole],
    ) -> Option<(SessionClaims, &'t str)> {
        let bearer = token?;
        let claims = self
            .state
            .sessions
            .verify_session_and_role(Some(bearer), allowed_roles)
            .await?;
        Some((claims, bearer))
    }

    pub async fn get(
        &self,
        token: Option<&str>,
        shipment_id: AppResult<String>,
    ) -> ActionResult<RouteNodesPayload> {
        let Some((claims, bearer)) = self.authorize(token, ROUTE_NODE_READ_ROLES).await else {
            return ActionResult::unauthorized();
        };
        let shipment_id = match shipment_id {
            Ok(id) => id,
            Err(e) => return invalid_input(e),
        };
        let shipment_id = shipment_id.as_str();
        if validate_not_empty(shipment_id).is_err() {
            return ActionResult::failure("Shipment id is required");
        }

        log::info!("🗺️ Obteniendo route nodes del embarque {} ({})", shipment_id, claims.sub);

        match self.state.route_nodes.get_route_nodes(shipment_id, bearer).await {
            Ok(payload) => {
                log::info!(
                    "✅ {} route nodes para {} (derived: {})",
                    payload.route_nodes.len(),
                    shipment_id,
                    payload.derived
                );
                ActionResult::success(payload)
            }
            Err(e) => upstream_failure("get", shipment_id, e),
        }
    }

    pub async fn replace(
        &self,
        token: Option<&str>,
        shipment_id: AppResult<String>,
        body: AppResult<ReplaceRouteNodesBody>,
    ) -> ActionResult<RouteNodesPayload> {
        let Some((claims, bearer)) = self.authorize(token, ROUTE_NODE_WRITE_ROLES).await else {
            return ActionResult::unauthorized();
        };
        let (shipment_id, nodes) = match (shipment_id, body) {
            (Ok(id), Ok(body)) => (id, body.route_nodes),
            (Err(e), _) | (_, Err(e)) => return invalid_input(e),
        };
        let shipment_id = shipment_id.as_str();
        if validate_not_empty(shipment_id).is_err() {
            return ActionResult::failure("Shipment id is required");
        }
        if let Err(e) = validate_route_nodes(&nodes) {
            log::warn!("⚠️ Ruta inválida para {}: {}", shipment_id, e);
            return ActionResult::failure(e.to_string());
        }

        log::info!(
            "✏️ Reemplazando {} route nodes del embarque {} ({})",
            nodes.len(),
            shipment_id,
            claims.sub
        );

        match self
            .state
            .route_nodes
            .replace_route_nodes(shipment_id, nodes, bearer)
            .await
        {
            Ok(payload) => ActionResult::success(payload),
            Err(e) => upstream_failure("replace", shipment_id, e),
        }
    }

    pub async fn patch_timing(
        &self,
        token: Option<&str>,
        target: AppResult<(String, u32)>,
        patch: AppResult<RouteNodeTimingPatch>,
    ) -> ActionResult<RouteNode> {
        let Some((claims, bearer)) = self.authorize(token, ROUTE_NODE_WRITE_ROLES).await else {
            return ActionResult::unauthorized();
        };
        let ((shipment_id, sequence), patch) = match (target, patch) {
            (Ok(target), Ok(patch)) => (target, patch),
            (Err(e), _) | (_, Err(e)) => return invalid_input(e),
        };
        let shipment_id = shipment_id.as_str();
        if validate_not_empty(shipment_id).is_err() {
            return ActionResult::failure("Shipment id is required");
        }
        if patch.is_empty() {
            return ActionResult::failure("No timing fields provided");
        }

        log::info!(
            "⏱️ Actualizando tiempos del nodo {} del embarque {} ({})",
            sequence,
            shipment_id,
            claims.sub
        );

        match self
            .state
            .route_nodes
            .patch_route_node_timing(shipment_id, sequence, &patch, bearer)
            .await
        {
            Ok(node) => ActionResult::success(node),
            Err(e) => upstream_failure("patch", shipment_id, e),
        }
    }
}

fn invalid_input<T>(error: AppError) -> ActionResult<T> {
    log::warn!("⚠️ Entrada inválida en route nodes: {}", error);
    ActionResult::failure(error.client_message())
}

fn upstream_failure<T>(
    operation: &str,
    shipment_id: &str,
    error: ShipmentClientError,
) -> ActionResult<T> {
    log::error!(
        "❌ Error en route nodes ({}) para {}: {}",
        operation,
        shipment_id,
        error
    );
    ActionResult::failure(error.client_message())
}
