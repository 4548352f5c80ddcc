//! Authentication service
//!
//! Handles member registration, login, and token refresh.

use blog_core::entities::Member;
use tracing::{info, instrument, warn};

use crate::dto::{
    AuthResponse, LoginRequest, MemberResponse, RefreshTokenRequest, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new member
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_username(&request.username)?;

        // Check if email already exists
        if self.ctx.member_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        // Check if username already exists
        if self
            .ctx
            .member_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(ServiceError::conflict("Username already taken"));
        }

        // Validate password strength and hash it
        let password_hash = self
            .ctx
            .password_service()
            .validate_and_hash(&request.password)
            .map_err(ServiceError::from)?;

        // Create member
        let member_id = self.ctx.generate_id();
        let member = Member::new(member_id, request.email, request.username, password_hash);

        // Save to database
        self.ctx.member_repo().create(&member).await?;

        info!(member_id = %member_id, "Member registered successfully");

        // Generate tokens
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(member.id, &member.roles)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            MemberResponse::from(&member),
        ))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Find member by email
        let member = self
            .ctx
            .member_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: member not found");
                ServiceError::App(blog_common::AppError::InvalidCredentials)
            })?;

        // Verify password
        self.ctx
            .password_service()
            .verify_or_error(&request.password, &member.password_hash)
            .map_err(|e| {
                warn!(member_id = %member.id, "Login failed: password verification failed");
                ServiceError::App(e)
            })?;

        info!(member_id = %member.id, "Member logged in successfully");

        // Generate tokens
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(member.id, &member.roles)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            MemberResponse::from(&member),
        ))
    }

    /// Refresh the token pair using a refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(
        &self,
        request: RefreshTokenRequest,
    ) -> ServiceResult<AuthResponse> {
        // Validate the refresh token
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;

        let member_id = claims.member_id().map_err(ServiceError::from)?;

        // The account may have been deleted since the token was issued
        let member = self
            .ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or(ServiceError::App(blog_common::AppError::InvalidToken))?;

        // Roles are re-read from the database so a promotion or demotion
        // takes effect on the next refresh
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(member.id, &member.roles)
            .map_err(ServiceError::from)?;

        info!(member_id = %member.id, "Tokens refreshed successfully");

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            MemberResponse::from(&member),
        ))
    }
}

/// Check that a username contains only lowercase latin letters and underscores
fn validate_username(username: &str) -> ServiceResult<()> {
    if username.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
        Ok(())
    } else {
        Err(ServiceError::Domain(
            blog_core::DomainError::InvalidUsername(
                "Username must contain only lowercase latin characters and underscores"
                    .to_string(),
            ),
        ))
    }
}
