//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::info;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub database_url: String,
    // Servicio externo de embarques
    pub shipment_api_url: String,
    pub shipment_api_timeout_secs: u64,
}

impl EnvironmentConfig {
    /// Cargar la configuración desde el entorno
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            environment: var_or("ENVIRONMENT", "development"),
            port: parse_or("PORT", 3000)?,
            host: var_or("HOST", "0.0.0.0"),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration: parse_or("JWT_EXPIRATION", 3600)?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
            database_url: required("DATABASE_URL")?,
            shipment_api_url: required("SHIPMENT_API_URL")?
                .trim_end_matches('/')
                .to_string(),
            shipment_api_timeout_secs: parse_or("SHIPMENT_API_TIMEOUT_SECS", 30)?,
        })
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(key: &str) -> Result<String> {
    env::var(key).map_err(|_| anyhow!("{} must be set", key))
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{} no definido, usando valor por defecto: {}", key, default);
        default.to_string()
    })
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", key)),
        Err(_) => {
            info!("{} no definido, usando valor por defecto: {}", key, default);
            Ok(default)
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
