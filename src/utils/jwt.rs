//! Utilidades JWT
//!
//! Este módulo contiene funciones helper para emitir y verificar los tokens
//! de sesión de la plataforma.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::environment::EnvironmentConfig,
    models::auth::{PlatformRole, SessionClaims},
    utils::errors::AppError,
};

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Generar JWT token para un usuario
pub fn generate_token(
    uid: &str,
    role: PlatformRole,
    company_id: Option<String>,
    config: &JwtConfig,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.expiration as i64);

    let claims = SessionClaims {
        sub: uid.to_string(),
        role: role.as_str().to_string(),
        company_id,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_ref()),
    )
    .map_err(|e| AppError::Internal(format!("Error generando token: {}", e)))
}

/// Verificar y decodificar JWT token
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<SessionClaims, AppError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Token inválido: {}", e)))
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
