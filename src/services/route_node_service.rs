//! Validación de rutas
//!
//! Reglas de forma de una lista de route nodes antes de enviarla completa al
//! servicio de embarques.

use std::collections::HashSet;
use thiserror::Error;
use validator::Validate;

use crate::models::route_node::{NodeRole, RouteNode};

/// Errores de validación de una ruta
#[derive(Error, Debug, PartialEq)]
pub enum RouteValidationError {
    #[error("A route needs at least an origin and a destination")]
    TooFewNodes,

    #[error("Sequence {0} is used by more than one node")]
    DuplicateSequence(u32),

    #[error("Route must have exactly one ORIGIN (found {0})")]
    OriginCount(usize),

    #[error("Route must have exactly one DESTINATION (found {0})")]
    DestinationCount(usize),

    #[error("ORIGIN must have the lowest sequence")]
    OriginNotFirst,

    #[error("DESTINATION must have the highest sequence")]
    DestinationNotLast,

    #[error("Node {sequence} ({port}): {message}")]
    InvalidNode {
        sequence: u32,
        port: String,
        message: String,
    },
}

/// Validar campos y estructura de la ruta
pub fn validate_route_nodes(nodes: &[RouteNode]) -> Result<(), RouteValidationError> {
    for node in nodes {
        node.validate().map_err(|e| RouteValidationError::InvalidNode {
            sequence: node.sequence,
            port: node.port_un_code.clone(),
            message: e.to_string(),
        })?;
    }

    if nodes.len() < 2 {
        return Err(RouteValidationError::TooFewNodes);
    }

    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.sequence) {
            return Err(RouteValidationError::DuplicateSequence(node.sequence));
        }
    }

    let count = |role: NodeRole| nodes.iter().filter(|n| n.role == role).count();
    let origins = count(NodeRole::Origin);
    if origins != 1 {
        return Err(RouteValidationError::OriginCount(origins));
    }
    let destinations = count(NodeRole::Destination);
    if destinations != 1 {
        return Err(RouteValidationError::DestinationCount(destinations));
    }

    // hay al menos dos nodos y las secuencias son únicas
    let min = nodes.iter().map(|n| n.sequence).min().unwrap_or_default();
    let max = nodes.iter().map(|n| n.sequence).max().unwrap_or_default();

    let origin_ok = nodes
        .iter()
        .any(|n| n.role == NodeRole::Origin && n.sequence == min);
    if !origin_ok {
        return Err(RouteValidationError::OriginNotFirst);
    }

    let destination_ok = nodes
        .iter()
        .any(|n| n.role == NodeRole::Destination && n.sequence == max);
    if !destination_ok {
        return Err(RouteValidationError::DestinationNotLast);
    }

    Ok(())
}
