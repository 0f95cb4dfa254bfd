//! Plataforma de operaciones AF
//!
//! Backend de la plataforma interna: directorio de usuarios combinado,
//! autorización por roles y edición de route nodes de embarques contra el
//! servicio externo de embarques.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
