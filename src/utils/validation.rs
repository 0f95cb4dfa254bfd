//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// UN/LOCODE: país ISO 3166 (2 letras) + localidad (3 caracteres A-Z, 2-9)
    pub static ref UN_LOCODE_REGEX: Regex = Regex::new(r"^[A-Z]{2}[A-Z2-9]{3}$")
        .expect("UN/LOCODE regex is valid");
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
