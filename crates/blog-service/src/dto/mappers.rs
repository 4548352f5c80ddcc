//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use blog_core::entities::{Article, Comment, Member, Note};

use super::responses::{ArticleResponse, CommentResponse, MemberResponse, NoteResponse};

// ============================================================================
// Member Mappers
// ============================================================================

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.to_string(),
            email: member.email.clone(),
            username: member.username.clone(),
            is_admin: member.is_admin(),
            roles: member.roles.effective_strings(),
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self::from(&member)
    }
}

// ============================================================================
// Article Mappers
// ============================================================================

/// Article paired with its resolved author, ready for projection
pub struct ArticleWithAuthor {
    pub article: Article,
    pub author: MemberResponse,
}

impl From<ArticleWithAuthor> for ArticleResponse {
    fn from(data: ArticleWithAuthor) -> Self {
        Self {
            id: data.article.id.to_string(),
            title: data.article.title.clone(),
            slug: data.article.slug.clone(),
            summary: data.article.summary.clone(),
            content: data.article.content.clone(),
            published_at: data.article.published_at,
            author: data.author,
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

/// Comment with everything its projection needs already resolved
pub struct CommentWithDetails {
    pub comment: Comment,
    pub author: MemberResponse,
    pub average_note: f64,
    pub children: Vec<CommentResponse>,
}

impl From<CommentWithDetails> for CommentResponse {
    fn from(data: CommentWithDetails) -> Self {
        Self {
            id: data.comment.id.to_string(),
            article_id: data.comment.article_id.to_string(),
            content: data.comment.content.clone(),
            published_at: data.comment.published_at,
            author: data.author,
            parent_id: data.comment.parent_id.map(|id| id.to_string()),
            average_note: data.average_note,
            children: data.children,
        }
    }
}

// ============================================================================
// Note Mappers
// ============================================================================

/// Note paired with its resolved author
pub struct NoteWithAuthor {
    pub note: Note,
    pub author: MemberResponse,
}

impl From<NoteWithAuthor> for NoteResponse {
    fn from(data: NoteWithAuthor) -> Self {
        Self {
            id: data.note.id.to_string(),
            value: data.note.value,
            author: data.author,
            created_at: data.note.created_at,
        }
    }
}
