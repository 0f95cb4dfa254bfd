use serde::{Deserialize, Serialize};

/// Roles del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformRole {
    Admin,
    Staff,
    CustomerAdmin,
    Customer,
}

impl PlatformRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformRole::Admin => "admin",
            PlatformRole::Staff => "staff",
            PlatformRole::CustomerAdmin => "customer_admin",
            PlatformRole::Customer => "customer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(PlatformRole::Admin),
            "staff" => Some(PlatformRole::Staff),
            "customer_admin" => Some(PlatformRole::CustomerAdmin),
            "customer" => Some(PlatformRole::Customer),
            _ => None,
        }
    }
}

/// Claims de la sesión
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // uid
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    pub exp: usize,
    pub iat: usize,
}
