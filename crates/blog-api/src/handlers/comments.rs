//! Comment handlers
//!
//! Endpoints for threaded comments, replies, and ratings.

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::{
    CommentResponse, CommentService, CreateCommentRequest, CreateNoteRequest, NoteService,
    UpdateCommentRequest,
};

use crate::extractors::{ArticleSlugPath, AuthUser, CommentIdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Get the threaded comment tree for an article
///
/// GET /articles/{slug}/comments
pub async fn get_article_comments(
    State(state): State<AppState>,
    Path(path): Path<ArticleSlugPath>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.comments_for_article(path.slug()).await?;
    Ok(Json(comments))
}

/// Post a top-level comment on an article
///
/// POST /articles/{slug}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ArticleSlugPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .create_comment(&auth.principal(), path.slug(), request)
        .await?;
    Ok(Created(Json(response)))
}

/// Flat list of all comments for moderation
///
/// GET /comments
pub async fn list_comments(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service
        .list_comments(&auth.principal(), pagination.limit, pagination.offset)
        .await?;
    Ok(Json(comments))
}

/// Get a comment with its reply subtree
///
/// GET /comments/{comment_id}
pub async fn get_comment(
    State(state): State<AppState>,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<Json<CommentResponse>> {
    let comment_id = path.comment_id()?;

    let service = CommentService::new(state.service_context());
    let response = service.get_comment(comment_id).await?;
    Ok(Json(response))
}

/// Edit a comment
///
/// PUT /comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let comment_id = path.comment_id()?;

    let service = CommentService::new(state.service_context());
    let response = service
        .update_comment(&auth.principal(), comment_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a comment and its reply subtree
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<NoContent> {
    let comment_id = path.comment_id()?;

    let service = CommentService::new(state.service_context());
    service.delete_comment(&auth.principal(), comment_id).await?;
    Ok(NoContent)
}

/// Reply to a comment
///
/// POST /comments/{comment_id}/replies
pub async fn create_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let parent_id = path.comment_id()?;

    let service = CommentService::new(state.service_context());
    let response = service
        .create_reply(&auth.principal(), parent_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Rate a comment, returning it with the recomputed average
///
/// POST /comments/{comment_id}/notes
pub async fn create_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
    Json(request): Json<CreateNoteRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let comment_id = path.comment_id()?;

    let service = NoteService::new(state.service_context());
    let response = service
        .rate_comment(&auth.principal(), comment_id, request)
        .await?;
    Ok(Created(Json(response)))
}
