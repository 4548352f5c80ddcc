//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Random letter-only suffix
///
/// Usernames only admit lowercase latin characters and underscores, so
/// the usual numeric suffixes would fail validation. This also keeps
/// fixtures unique across runs against the same database.
pub fn letter_suffix() -> String {
    let mut n = Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(12);
    for _ in 0..12 {
        let d = u8::try_from(n % 26).unwrap_or(0);
        suffix.push(char::from(b'a' + d));
        n /= 26;
    }
    suffix
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = letter_suffix();
        Self {
            username: format!("member_{suffix}"),
            email: format!("{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub member: MemberResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// Member response
#[derive(Debug, Deserialize)]
pub struct MemberResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub is_admin: bool,
    pub roles: Vec<String>,
}

/// Create article request
#[derive(Debug, Serialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub summary: String,
    pub content: String,
}

impl CreateArticleRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Article {suffix} {}", letter_suffix()),
            summary: "A summary for a test article".to_string(),
            content: "Body text long enough to pass validation".to_string(),
        }
    }

    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            summary: "A summary for a test article".to_string(),
            content: "Body text long enough to pass validation".to_string(),
        }
    }
}

/// Update article request
#[derive(Debug, Serialize, Default)]
pub struct UpdateArticleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Article response
#[derive(Debug, Deserialize)]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub published_at: String,
    pub author: MemberResponse,
}

/// Create comment request (top-level post or reply)
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

impl CreateCommentRequest {
    pub fn simple(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

/// Update comment request
#[derive(Debug, Serialize)]
pub struct UpdateCommentRequest {
    pub content: String,
}

/// Rate a comment
#[derive(Debug, Serialize)]
pub struct CreateNoteRequest {
    pub value: i32,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub article_id: String,
    pub content: String,
    pub published_at: String,
    pub author: MemberResponse,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub average_note: f64,
    pub children: Vec<CommentResponse>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
