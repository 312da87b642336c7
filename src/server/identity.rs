//! Caller identity.
//!
//! Authentication happens upstream; the authenticating proxy forwards the
//! caller's user id in `X-User-Id`. This extractor only reads and parses it.
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::shared::errors::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: Uuid,
}

impl AuthenticatedUser {
    fn from_parts(parts: &Parts) -> Result<Self, AppError> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| AppError::Unauthorized("Missing user identity".to_string()))?
            .to_str()
            .map_err(|_| AppError::Unauthorized("Malformed user identity".to_string()))?;

        let id = Uuid::parse_str(raw.trim())
            .map_err(|_| AppError::Unauthorized("Malformed user identity".to_string()))?;

        Ok(Self { id })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_parts(parts)
    }
}
