//! Modelo de Route Node
//!
//! Un route node es una escala (origen, transbordo o destino) dentro del
//! itinerario de un embarque. La lista completa pertenece al servicio externo
//! de embarques; aquí solo se lee, se reemplaza completa o se parchean los
//! tiempos de un nodo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::UN_LOCODE_REGEX;

/// Función del nodo dentro de la ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeRole {
    Origin,
    Tranship,
    Destination,
}

/// Escala de la ruta tal como la expone el servicio de embarques
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RouteNode {
    #[validate(regex(path = "UN_LOCODE_REGEX", message = "must be a 5-character UN/LOCODE"))]
    pub port_un_code: String,

    #[validate(length(min = 1, max = 100))]
    pub port_name: String,

    pub sequence: u32,
    pub role: NodeRole,

    #[serde(default)]
    pub scheduled_eta: Option<DateTime<Utc>>,
    #[serde(default)]
    pub actual_eta: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scheduled_etd: Option<DateTime<Utc>>,
    #[serde(default)]
    pub actual_etd: Option<DateTime<Utc>>,
}

/// Sobre `{route_nodes, derived}` devuelto por GET y PUT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteNodesPayload {
    pub route_nodes: Vec<RouteNode>,
    /// true cuando la lista fue calculada y no guardada explícitamente
    #[serde(default)]
    pub derived: bool,
}

impl RouteNodesPayload {
    /// Ordenar los nodos por secuencia
    pub fn into_ordered(mut self) -> Self {
        self.route_nodes.sort_by_key(|node| node.sequence);
        self
    }
}

/// Cuerpo del reemplazo completo, tanto el recibido como el enviado al
/// servicio de embarques
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceRouteNodesBody {
    pub route_nodes: Vec<RouteNode>,
}

/// Campos de tiempo actualizables de un nodo.
///
/// Un campo ausente o `null` queda sin cambios en el upstream; el parche no
/// puede borrar un tiempo ya registrado.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteNodeTimingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_eta: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_eta: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_etd: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_etd: Option<DateTime<Utc>>,
}

impl RouteNodeTimingPatch {
    pub fn is_empty(&self) -> bool {
        self.scheduled_eta.is_none()
            && self.actual_eta.is_none()
            && self.scheduled_etd.is_none()
            && self.actual_etd.is_none()
    }
}

/// Sobre `{node}` devuelto por PATCH
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteNodeEnvelope {
    pub node: RouteNode,
}
