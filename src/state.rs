//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;
use std::time::Duration;

use crate::clients::{RouteNodeClient, ShipmentClientError};
use crate::config::environment::EnvironmentConfig;
use crate::repositories::UserDirectory;
use crate::services::{JwtSessionVerifier, SessionVerifier, UserMergeService};
use crate::utils::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub users: UserMergeService,
    pub route_nodes: RouteNodeClient,
    pub sessions: Arc<dyn SessionVerifier>,
}

impl AppState {
    /// Estado con verificación JWT y cliente del servicio de embarques
    pub fn new(
        config: EnvironmentConfig,
        directory: Arc<dyn UserDirectory>,
    ) -> Result<Self, ShipmentClientError> {
        let route_nodes = RouteNodeClient::new(
            &config.shipment_api_url,
            Duration::from_secs(config.shipment_api_timeout_secs),
        )?;
        let sessions = Arc::new(JwtSessionVerifier::new(JwtConfig::from(&config)));

        Ok(Self {
            users: UserMergeService::new(directory),
            route_nodes,
            sessions,
            config,
        })
    }
}
