//! Member service
//!
//! Read operations over member accounts.

use blog_core::entities::Member;
use blog_core::Snowflake;
use tracing::instrument;

use crate::dto::MemberResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List members, newest first
    #[instrument(skip(self))]
    pub async fn list_members(&self, limit: i64, offset: i64) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.member_repo().list(limit, offset).await?;
        Ok(members.iter().map(MemberResponse::from).collect())
    }

    /// Get the authenticated member's own profile
    #[instrument(skip(self))]
    pub async fn get_current_member(&self, member_id: Snowflake) -> ServiceResult<MemberResponse> {
        let member = self.current_member_entity(member_id).await?;
        Ok(MemberResponse::from(&member))
    }

    /// Load the authenticated member's account row
    ///
    /// Tokens outlive accounts; a valid token whose member no longer exists
    /// maps to an invalid-token error so the client logs in again.
    pub async fn current_member_entity(&self, member_id: Snowflake) -> ServiceResult<Member> {
        self.ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or(ServiceError::App(blog_common::AppError::InvalidToken))
    }
}
