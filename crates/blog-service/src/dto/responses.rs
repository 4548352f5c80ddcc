//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub member: MemberResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        member: MemberResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            member,
        }
    }
}

// ============================================================================
// Member Responses
// ============================================================================

/// Member read projection
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub is_admin: bool,
    pub roles: Vec<String>,
}

// ============================================================================
// Article Responses
// ============================================================================

/// Article read projection with its author embedded
#[derive(Debug, Clone, Serialize)]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub published_at: DateTime<Utc>,
    pub author: MemberResponse,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment read projection
///
/// `children` nests the reply subtree and `average_note` is computed over
/// the notes attached directly to this comment, not its replies.
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub article_id: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub author: MemberResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub average_note: f64,
    pub children: Vec<CommentResponse>,
}

// ============================================================================
// Note Responses
// ============================================================================

/// Note read projection
#[derive(Debug, Clone, Serialize)]
pub struct NoteResponse {
    pub id: String,
    pub value: i32,
    pub author: MemberResponse,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
