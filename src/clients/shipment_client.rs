//! Cliente HTTP para el servicio de embarques
//!
//! Este módulo contiene el cliente de la API REST externa que es dueña de los
//! route nodes de cada embarque. Todas las llamadas llevan la credencial
//! bearer del usuario que origina la acción.

use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::models::route_node::{
    ReplaceRouteNodesBody, RouteNode, RouteNodeEnvelope, RouteNodeTimingPatch, RouteNodesPayload,
};

/// Errores del servicio de embarques
#[derive(Error, Debug)]
pub enum ShipmentClientError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("upstream returned HTTP {status}: {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ShipmentClientError {
    /// Mensaje para el resultado de la acción
    pub fn client_message(&self) -> String {
        match self {
            ShipmentClientError::Upstream { message, .. } => message.clone(),
            ShipmentClientError::Network(_) => "Failed to reach the shipment service".to_string(),
            ShipmentClientError::Decode(_) => {
                "Unexpected response from the shipment service".to_string()
            }
        }
    }
}

/// Mensaje genérico cuando el upstream no da detalle
pub fn generic_status_message(status: StatusCode) -> String {
    format!("Shipment service returned HTTP {}", status.as_u16())
}

/// Cliente HTTP para route nodes
#[derive(Clone)]
pub struct RouteNodeClient {
    client: Client,
    base_url: String,
}

impl RouteNodeClient {
    /// Crear nuevo cliente con URL base configurable
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ShipmentClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ShipmentClientError::Network)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn route_nodes_url(&self, shipment_id: &str) -> String {
        format!(
            "{}/api/v2/shipments/{}/route-nodes",
            self.base_url,
            urlencoding::encode(shipment_id)
        )
    }

    /// GET /api/v2/shipments/{id}/route-nodes
    pub async fn get_route_nodes(
        &self,
        shipment_id: &str,
        bearer: &str,
    ) -> Result<RouteNodesPayload, ShipmentClientError> {
        let response = self
            .client
            .get(self.route_nodes_url(shipment_id))
            .bearer_auth(bearer)
            .send()
            .await
            .map_err(ShipmentClientError::Network)?;

        let payload: RouteNodesPayload = decode_success(response).await?;
        Ok(payload.into_ordered())
    }

    /// PUT /api/v2/shipments/{id}/route-nodes (reemplazo completo)
    pub async fn replace_route_nodes(
        &self,
        shipment_id: &str,
        nodes: Vec<RouteNode>,
        bearer: &str,
    ) -> Result<RouteNodesPayload, ShipmentClientError> {
        let body = ReplaceRouteNodesBody { route_nodes: nodes };

        let response = self
            .client
            .put(self.route_nodes_url(shipment_id))
            .bearer_auth(bearer)
            .json(&body)
            .send()
            .await
            .map_err(ShipmentClientError::Network)?;

        let payload: RouteNodesPayload = decode_success(response).await?;
        Ok(payload.into_ordered())
    }

    /// PATCH /api/v2/shipments/{id}/route-nodes/{sequence} (solo tiempos)
    pub async fn patch_route_node_timing(
        &self,
        shipment_id: &str,
        sequence: u32,
        patch: &RouteNodeTimingPatch,
        bearer: &str,
    ) -> Result<RouteNode, ShipmentClientError> {
        let url = format!("{}/{}", self.route_nodes_url(shipment_id), sequence);

        let response = self
            .client
            .patch(url)
            .bearer_auth(bearer)
            .json(patch)
            .send()
            .await
            .map_err(ShipmentClientError::Network)?;

        let envelope: RouteNodeEnvelope = decode_success(response).await?;
        Ok(envelope.node)
    }
}

async fn decode_success<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, ShipmentClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.json::<Value>().await.ok();
        let message = body
            .as_ref()
            .and_then(error_detail)
            .unwrap_or_else(|| generic_status_message(status));
        return Err(ShipmentClientError::Upstream { status, message });
    }

    response.json::<T>().await.map_err(ShipmentClientError::Decode)
}

/// Extraer el detalle de error del cuerpo (`detail` o `message`)
fn error_detail(body: &Value) -> Option<String> {
    let detail = body.get("detail").or_else(|| body.get("message"))?;
    match detail {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
