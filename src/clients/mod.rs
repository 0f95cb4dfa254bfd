//! Clients - HTTP Clients for External APIs
//!
//! This module contains HTTP clients for communicating with external APIs.

pub mod shipment_client;

pub use shipment_client::{RouteNodeClient, ShipmentClientError};
