//! Extracción de la credencial de sesión
//!
//! La decisión de autorización la toma cada acción a través del
//! `SessionVerifier`; aquí solo se lee el token bearer de la request.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::convert::Infallible;

use crate::utils::jwt::extract_token_from_header;

/// Token bearer opcional de la request
#[derive(Debug, Clone, Default)]
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(extract_token_from_header)
            .map(str::to_string);

        Ok(BearerToken(token))
    }
}
