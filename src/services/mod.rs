//! Services module
//!
//! Este módulo contiene la lógica de negocio de la plataforma: autorización
//! por roles, combinación del directorio de usuarios y validación de rutas.

pub mod authorization_service;
pub mod route_node_service;
pub mod user_merge_service;

pub use authorization_service::*;
pub use route_node_service::*;
pub use user_merge_service::*;
