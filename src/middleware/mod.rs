//! Middleware del sistema
//!
//! Este módulo contiene la extracción de credenciales y CORS.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;
