//! Modelos de usuario
//!
//! Los datos de un usuario viven en tres colecciones independientes, todas
//! indexadas por uid: la cuenta, el registro de acceso (IAM) y la membresía
//! de empresa. `UserRecord` es la vista combinada que consume el frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Rol por defecto cuando no hay membresía de empresa
pub const UNKNOWN_ROLE: &str = "unknown";

/// Tipo de cuenta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Company,
    Staff,
}

impl AccountType {
    /// Cualquier valor distinto de "company" se trata como cuenta interna
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("company") {
            AccountType::Company
        } else {
            AccountType::Staff
        }
    }
}

/// Registro de la colección de cuentas
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccountRecord {
    pub uid: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub account_type: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Registro de la colección de acceso (IAM)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccessRecord {
    pub uid: String,
    pub valid_access: Option<bool>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Registro de la colección de membresías de empresa
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyMemberRecord {
    pub uid: String,
    pub company_id: Option<String>,
    pub role: Option<String>,
}

/// Vista combinada de un usuario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub uid: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub account_type: AccountType,
    pub company_id: Option<String>,
    pub role: String,
    pub valid_access: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}
