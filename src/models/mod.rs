//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos: sesión, route nodes,
//! colecciones de usuario y contenido del sitio público.

pub mod auth;
pub mod route_node;
pub mod site;
pub mod user;
