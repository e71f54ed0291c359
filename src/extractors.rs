use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{names, rejections::AppError};

/// Resolves the platform-assigned user id from the identity header. The value
/// is trusted verbatim; any process that can set the header can act as any
/// user.
pub struct CurrentUser(pub String);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(names::PLATFORM_USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| CurrentUser(v.to_owned()))
            .ok_or(AppError::Unauthorized)
    }
}
