//! Article handlers
//!
//! Endpoints for article CRUD, addressed by slug.

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::{
    ArticleResponse, ArticleService, CreateArticleRequest, UpdateArticleRequest,
};

use crate::extractors::{ArticleSlugPath, AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List articles
///
/// GET /articles
pub async fn list_articles(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<ArticleResponse>>> {
    let service = ArticleService::new(state.service_context());
    let articles = service
        .list_articles(pagination.limit, pagination.offset)
        .await?;
    Ok(Json(articles))
}

/// Get article by slug
///
/// GET /articles/{slug}
pub async fn get_article(
    State(state): State<AppState>,
    Path(path): Path<ArticleSlugPath>,
) -> ApiResult<Json<ArticleResponse>> {
    let service = ArticleService::new(state.service_context());
    let response = service.get_article(path.slug()).await?;
    Ok(Json(response))
}

/// Create an article
///
/// POST /articles
pub async fn create_article(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateArticleRequest>,
) -> ApiResult<Created<Json<ArticleResponse>>> {
    let service = ArticleService::new(state.service_context());
    let response = service.create_article(&auth.principal(), request).await?;
    Ok(Created(Json(response)))
}

/// Update an article
///
/// PUT /articles/{slug}
pub async fn update_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ArticleSlugPath>,
    ValidatedJson(request): ValidatedJson<UpdateArticleRequest>,
) -> ApiResult<Json<ArticleResponse>> {
    let service = ArticleService::new(state.service_context());
    let response = service
        .update_article(&auth.principal(), path.slug(), request)
        .await?;
    Ok(Json(response))
}

/// Delete an article
///
/// DELETE /articles/{slug}
pub async fn delete_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ArticleSlugPath>,
) -> ApiResult<NoContent> {
    let service = ArticleService::new(state.service_context());
    service.delete_article(&auth.principal(), path.slug()).await?;
    Ok(NoContent)
}
