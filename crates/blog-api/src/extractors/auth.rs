//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use blog_core::{Principal, RoleSet, Snowflake};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated member extracted from JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Member ID from the JWT token
    pub member_id: Snowflake,
    /// Roles carried by the token
    pub roles: RoleSet,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(member_id: Snowflake, roles: RoleSet) -> Self {
        Self { member_id, roles }
    }

    /// Build the authorization principal for voter checks
    pub fn principal(&self) -> Principal {
        Principal::new(self.member_id, self.roles.clone())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        // Extract member ID from claims
        let member_id = claims.member_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid member ID in token");
            ApiError::InvalidAuthFormat
        })?;

        // Extract roles from claims
        let roles = claims.role_set().map_err(|e| {
            tracing::warn!(error = %e, "Invalid roles in token");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AuthUser::new(member_id, roles))
    }
}
