//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Member registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 2, max = 50, message = "Username must be 2-50 characters"))]
    pub username: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Member login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Article Requests
// ============================================================================

/// Create article request
///
/// The slug is never accepted from the caller; it is derived from the title.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArticleRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "Summary must be 1-255 characters"))]
    pub summary: String,

    #[validate(length(min = 10, message = "Content must be at least 10 characters"))]
    pub content: String,
}

/// Update article request
///
/// Absent fields keep their stored value. A new title regenerates the slug.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateArticleRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Summary must be 1-255 characters"))]
    pub summary: Option<String>,

    #[validate(length(min = 10, message = "Content must be at least 10 characters"))]
    pub content: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request (top-level post or reply)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 5, max = 10000, message = "Comment must be 5-10000 characters"))]
    pub content: String,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 5, max = 10000, message = "Comment must be 5-10000 characters"))]
    pub content: String,
}

// ============================================================================
// Note Requests
// ============================================================================

/// Rate a comment
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteRequest {
    /// Rating value; any integer, averaged over the comment's notes
    pub value: i32,
}
