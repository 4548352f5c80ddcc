//! Comment entity - a threaded comment under an article
//!
//! Comments form a reply tree: each row stores only its optional parent id,
//! and children are derived at read time from the flat per-article list.
//! There is no re-parent operation, so cycles cannot form.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub article_id: Snowflake,
    pub author_id: Snowflake,
    pub parent_id: Option<Snowflake>,
    pub content: String,
    pub published_at: DateTime<Utc>,
}

impl Comment {
    /// Create a top-level Comment on an article
    pub fn new(id: Snowflake, article_id: Snowflake, author_id: Snowflake, content: String) -> Self {
        Self {
            id,
            article_id,
            author_id,
            parent_id: None,
            content,
            published_at: Utc::now(),
        }
    }

    /// Create a reply to an existing Comment
    ///
    /// The article is taken from the parent, so a reply can never land on a
    /// different article than the comment it answers.
    pub fn new_reply(id: Snowflake, parent: &Comment, author_id: Snowflake, content: String) -> Self {
        Self {
            id,
            article_id: parent.article_id,
            author_id,
            parent_id: Some(parent.id),
            content,
            published_at: Utc::now(),
        }
    }

    /// Check whether this comment is a reply
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Check whether a member authored this comment
    #[inline]
    pub fn is_authored_by(&self, member_id: Snowflake) -> bool {
        self.author_id == member_id
    }

    /// Edit the comment body
    pub fn edit(&mut self, content: String) {
        self.content = content;
    }
}

/// Derive the children index over a flat arena of comments
///
/// Maps each parent id (`None` for the roots) to its children's ids,
/// preserving input order. Comments are never stored with a children
/// collection; this index is recomputed from the arena wherever a tree
/// view is needed.
#[must_use]
pub fn children_index(comments: &[Comment]) -> HashMap<Option<Snowflake>, Vec<Snowflake>> {
    let mut index: HashMap<Option<Snowflake>, Vec<Snowflake>> = HashMap::new();
    for comment in comments {
        index.entry(comment.parent_id).or_default().push(comment.id);
    }
    index
}
