//! Article entity - a published blog post addressed by its slug

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Article entity
///
/// The slug is derived from the title and stays unique across all articles;
/// retitling regenerates it. The author link is set at creation and never
/// reassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl Article {
    /// Create a new Article, published now
    pub fn new(id: Snowflake, author_id: Snowflake, title: String, slug: String) -> Self {
        Self {
            id,
            author_id,
            title,
            slug,
            summary: None,
            content: None,
            published_at: Utc::now(),
        }
    }

    /// Check whether a member authored this article
    #[inline]
    pub fn is_authored_by(&self, member_id: Snowflake) -> bool {
        self.author_id == member_id
    }

    /// Replace title and the slug derived from it
    ///
    /// The two always change together; a stale slug would break every
    /// existing link to the article under the old title.
    pub fn retitle(&mut self, title: String, slug: String) {
        self.title = title;
        self.slug = slug;
    }

    /// Update the summary
    pub fn set_summary(&mut self, summary: Option<String>) {
        self.summary = summary;
    }

    /// Update the body content
    pub fn set_content(&mut self, content: Option<String>) {
        self.content = content;
    }
}
