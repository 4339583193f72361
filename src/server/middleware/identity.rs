//! Extraction of the caller identity relayed by the gateway.
//!
//! Identity arrives as the unauthenticated `X-Sharer-User-Id` header set by
//! the gateway. It is a trusted input, not a credential: extraction parses
//! the header but performs no authentication and no database lookup.
//! Whether the referenced user actually exists is a per-operation business
//! check in the service layer.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::error::AppError;

pub const USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Identity of the calling user, taken from the `X-Sharer-User-Id` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerId(pub i32);

impl<S> FromRequestParts<S> for SharerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| AppError::BadRequest(format!("Missing {} header", USER_ID_HEADER)))?;

        let user_id = value
            .to_str()
            .ok()
            .and_then(|text| text.trim().parse::<i32>().ok())
            .ok_or_else(|| AppError::BadRequest(format!("Invalid {} header", USER_ID_HEADER)))?;

        Ok(SharerId(user_id))
    }
}
