use async_trait::async_trait;

use crate::models::auth::{PlatformRole, SessionClaims};
use crate::utils::jwt::{verify_token, JwtConfig};

/// Lectura de route nodes: personal interno y clientes
pub const ROUTE_NODE_READ_ROLES: &[PlatformRole] = &[
    PlatformRole::Admin,
    PlatformRole::Staff,
    PlatformRole::CustomerAdmin,
    PlatformRole::Customer,
];

/// Escritura de route nodes: solo personal interno
pub const ROUTE_NODE_WRITE_ROLES: &[PlatformRole] = &[PlatformRole::Admin, PlatformRole::Staff];

/// Gestión del directorio de usuarios
pub const USER_ADMIN_ROLES: &[PlatformRole] = &[PlatformRole::Admin, PlatformRole::Staff];

/// Perfil propio
pub const PROFILE_ROLES: &[PlatformRole] = &[
    PlatformRole::Admin,
    PlatformRole::Staff,
    PlatformRole::CustomerAdmin,
    PlatformRole::Customer,
];

/// Verifica si un rol (tal como viene en la sesión) está entre los permitidos
pub fn has_any_role(role: &str, allowed_roles: &[PlatformRole]) -> bool {
    PlatformRole::parse(role).map_or(false, |role| allowed_roles.contains(&role))
}

/// Verificador de sesión y rol.
///
/// Devuelve los claims cuando la sesión es válida y su rol está permitido;
/// `None` en cualquier otro caso. Quien llama no revisa la decisión.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn verify_session_and_role(
        &self,
        token: Option<&str>,
        allowed_roles: &[PlatformRole],
    ) -> Option<SessionClaims>;
}

/// Verificador basado en JWT firmado con el secreto de la plataforma
pub struct JwtSessionVerifier {
    config: JwtConfig,
}

impl JwtSessionVerifier {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl SessionVerifier for JwtSessionVerifier {
    async fn verify_session_and_role(
        &self,
        token: Option<&str>,
        allowed_roles: &[PlatformRole],
    ) -> Option<SessionClaims> {
        let token = token?;

        let claims = match verify_token(token, &self.config) {
            Ok(claims) => claims,
            Err(e) => {
                log::warn!("🔒 Sesión rechazada: {}", e);
                return None;
            }
        };

        if !has_any_role(&claims.role, allowed_roles) {
            log::warn!(
                "🔒 Rol '{}' no permitido para el usuario {}",
                claims.role,
                claims.sub
            );
            return None;
        }

        Some(claims)
    }
}
