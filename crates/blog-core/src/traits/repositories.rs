//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer
//! provides the implementation. Deletes are hard deletes, and the store
//! is expected to cascade them along the Member -> Article -> Comment ->
//! Note foreign-key chain.

use async_trait::async_trait;

use crate::entities::{Article, Comment, Member, Note};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find member by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Member>>;

    /// Find member by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// List members, newest first
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Member>>;

    /// Create a new member
    async fn create(&self, member: &Member) -> RepoResult<()>;

    /// Update an existing member
    async fn update(&self, member: &Member) -> RepoResult<()>;

    /// Delete a member (cascades to owned articles)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Article Repository
// ============================================================================

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Find article by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Article>>;

    /// Find article by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Article>>;

    /// List articles, newest first
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Article>>;

    /// Slugs that start with a prefix, optionally ignoring one article
    ///
    /// Feeds slug dedup: the caller collides the candidate base against
    /// everything already taken. `exclude` skips the article being
    /// retitled so it can keep its own slug.
    async fn slugs_with_prefix(
        &self,
        prefix: &str,
        exclude: Option<Snowflake>,
    ) -> RepoResult<Vec<String>>;

    /// Create a new article
    async fn create(&self, article: &Article) -> RepoResult<()>;

    /// Update an existing article
    async fn update(&self, article: &Article) -> RepoResult<()>;

    /// Delete an article (cascades to its comments and their notes)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// Flat arena of an article's comments, oldest first
    async fn find_by_article(&self, article_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// List comments across all articles, newest first
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Update an existing comment
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment (cascades to its notes and reply subtree)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Note Repository
// ============================================================================

#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Notes attached directly to one comment
    async fn find_by_comment(&self, comment_id: Snowflake) -> RepoResult<Vec<Note>>;

    /// Notes for every comment of an article, in one query
    async fn find_by_article(&self, article_id: Snowflake) -> RepoResult<Vec<Note>>;

    /// Create a new note
    async fn create(&self, note: &Note) -> RepoResult<()>;
}
