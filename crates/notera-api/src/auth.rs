//! Authentication guard.
//!
//! Protected routes take an [`AuthUser`] extractor argument. The
//! `Authorization` header's literal value is the session token; it is
//! resolved to a user by exact string comparison against stored tokens.
//! That external contract is fixed; the lookup itself is pluggable through
//! `UserStore::find_by_token`.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor for authenticated requests.
///
/// Usage:
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> impl IntoResponse {
///     // auth.user is the resolved, authenticated user
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: notera_core::User,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("Unauthorized".to_string()))?;

        let user = state
            .users
            .resolve_token(token)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Unauthorized".to_string()))?;

        Ok(AuthUser { user })
    }
}
