//! Member handlers
//!
//! Endpoints for member listing and the current member profile.

use axum::{extract::State, Json};
use blog_service::{MemberResponse, MemberService};

use crate::extractors::{AuthUser, Pagination};
use crate::response::ApiResult;
use crate::state::AppState;

/// List members
///
/// GET /members
pub async fn list_members(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let members = service
        .list_members(pagination.limit, pagination.offset)
        .await?;
    Ok(Json(members))
}

/// Get current member
///
/// GET /members/@me
pub async fn get_current_member(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let response = service.get_current_member(auth.member_id).await?;
    Ok(Json(response))
}
