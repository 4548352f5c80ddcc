//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(Snowflake),

    #[error("Article not found: {0}")]
    ArticleNotFound(Snowflake),

    #[error("Article not found: {0}")]
    ArticleSlugNotFound(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Note not found: {0}")]
    NoteNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Authentication / Authorization Errors
    // =========================================================================
    #[error("No authenticated member for this request")]
    UnauthenticatedPrincipal,

    #[error("Access denied")]
    AccessDenied,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("Slug already in use: {0}")]
    SlugAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::ArticleNotFound(_) | Self::ArticleSlugNotFound(_) => "UNKNOWN_ARTICLE",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::NoteNotFound(_) => "UNKNOWN_NOTE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::WeakPassword(_) => "WEAK_PASSWORD",

            // Authentication / Authorization
            Self::UnauthenticatedPrincipal => "UNAUTHENTICATED",
            Self::AccessDenied => "FORBIDDEN",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::SlugAlreadyExists(_) => "SLUG_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MemberNotFound(_)
                | Self::ArticleNotFound(_)
                | Self::ArticleSlugNotFound(_)
                | Self::CommentNotFound(_)
                | Self::NoteNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidUsername(_)
                | Self::WeakPassword(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AccessDenied)
    }

    /// Check if this is an authentication error
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::UnauthenticatedPrincipal)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::UsernameAlreadyExists | Self::SlugAlreadyExists(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::MemberNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_MEMBER");

        let err = DomainError::ArticleSlugNotFound("missing-post".to_string());
        assert_eq!(err.code(), "UNKNOWN_ARTICLE");

        let err = DomainError::AccessDenied;
        assert_eq!(err.code(), "FORBIDDEN");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::ArticleNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::CommentNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_taxonomy_is_disjoint() {
        let denied = DomainError::AccessDenied;
        assert!(denied.is_authorization());
        assert!(!denied.is_not_found());
        assert!(!denied.is_unauthenticated());

        let unauthenticated = DomainError::UnauthenticatedPrincipal;
        assert!(unauthenticated.is_unauthenticated());
        assert!(!unauthenticated.is_authorization());

        let conflict = DomainError::SlugAlreadyExists("a-post".to_string());
        assert!(conflict.is_conflict());
        assert!(!conflict.is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::MemberNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Member not found: 123");

        let err = DomainError::SlugAlreadyExists("a-post".to_string());
        assert_eq!(err.to_string(), "Slug already in use: a-post");
    }
}
