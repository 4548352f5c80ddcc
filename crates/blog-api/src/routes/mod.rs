//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{articles, auth, comments, health, members};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(member_routes())
        .merge(article_routes())
        .merge(comment_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// Member routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list_members))
        .route("/members/@me", get(members::get_current_member))
}

/// Article routes
fn article_routes() -> Router<AppState> {
    Router::new()
        // Article CRUD
        .route("/articles", get(articles::list_articles))
        .route("/articles", post(articles::create_article))
        .route("/articles/:slug", get(articles::get_article))
        .route("/articles/:slug", put(articles::update_article))
        .route("/articles/:slug", delete(articles::delete_article))
        // Article comments
        .route("/articles/:slug/comments", get(comments::get_article_comments))
        .route("/articles/:slug/comments", post(comments::create_comment))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        // Comment CRUD
        .route("/comments", get(comments::list_comments))
        .route("/comments/:comment_id", get(comments::get_comment))
        .route("/comments/:comment_id", put(comments::update_comment))
        .route("/comments/:comment_id", delete(comments::delete_comment))
        // Replies
        .route("/comments/:comment_id/replies", post(comments::create_reply))
        // Notes
        .route("/comments/:comment_id/notes", post(comments::create_note))
}
