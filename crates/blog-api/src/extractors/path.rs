//! Path parameter extractors
//!
//! Type-safe extraction of slugs and Snowflake IDs from path parameters.

use blog_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with an article slug
#[derive(Debug, serde::Deserialize)]
pub struct ArticleSlugPath {
    pub slug: String,
}

impl ArticleSlugPath {
    /// Get the slug
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// Path parameters with comment_id
#[derive(Debug, serde::Deserialize)]
pub struct CommentIdPath {
    pub comment_id: String,
}

impl CommentIdPath {
    /// Parse comment_id as Snowflake
    pub fn comment_id(&self) -> Result<Snowflake, ApiError> {
        self.comment_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))
    }
}
