use serde::{Deserialize, Serialize};

use crate::utils::errors::AppError;

// Resultado etiquetado de una acción: nunca se propaga un error al llamador
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ActionResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn unauthorized() -> Self {
        Self::failure("Unauthorized")
    }
}

impl<T> From<Result<T, AppError>> for ActionResult<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => {
                log::error!("❌ Acción fallida: {}", e);
                Self::failure(e.client_message())
            }
        }
    }
}
