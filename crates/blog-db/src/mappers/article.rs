//! Article entity <-> model mapper

use blog_core::entities::Article;
use blog_core::value_objects::Snowflake;

use crate::models::ArticleModel;

/// Convert ArticleModel to Article entity
impl From<ArticleModel> for Article {
    fn from(model: ArticleModel) -> Self {
        Article {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            title: model.title,
            slug: model.slug,
            summary: model.summary,
            content: model.content,
            published_at: model.published_at,
        }
    }
}
