//! PostgreSQL implementation of ArticleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Article;
use blog_core::error::DomainError;
use blog_core::traits::{ArticleRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::models::ArticleModel;

use super::error::{article_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of ArticleRepository
#[derive(Clone)]
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    /// Create a new PgArticleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Article>> {
        let result = sqlx::query_as::<_, ArticleModel>(
            r"
            SELECT id, author_id, title, slug, summary, content, published_at
            FROM articles
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Article::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Article>> {
        let result = sqlx::query_as::<_, ArticleModel>(
            r"
            SELECT id, author_id, title, slug, summary, content, published_at
            FROM articles
            WHERE slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Article::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Article>> {
        let results = sqlx::query_as::<_, ArticleModel>(
            r"
            SELECT id, author_id, title, slug, summary, content, published_at
            FROM articles
            ORDER BY id DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Article::from).collect())
    }

    #[instrument(skip(self))]
    async fn slugs_with_prefix(
        &self,
        prefix: &str,
        exclude: Option<Snowflake>,
    ) -> RepoResult<Vec<String>> {
        // Slugs only contain [a-z0-9-], so the prefix carries no LIKE
        // metacharacters.
        let results = sqlx::query_scalar::<_, String>(
            r"
            SELECT slug FROM articles
            WHERE slug LIKE $1 || '%' AND ($2::BIGINT IS NULL OR id <> $2)
            ",
        )
        .bind(prefix)
        .bind(exclude.map(Snowflake::into_inner))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }

    #[instrument(skip(self))]
    async fn create(&self, article: &Article) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO articles (id, author_id, title, slug, summary, content, published_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(article.id.into_inner())
        .bind(article.author_id.into_inner())
        .bind(&article.title)
        .bind(&article.slug)
        .bind(&article.summary)
        .bind(&article.content)
        .bind(article.published_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |_| DomainError::SlugAlreadyExists(article.slug.clone()))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, article: &Article) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE articles
            SET title = $2, slug = $3, summary = $4, content = $5
            WHERE id = $1
            ",
        )
        .bind(article.id.into_inner())
        .bind(&article.title)
        .bind(&article.slug)
        .bind(&article.summary)
        .bind(&article.content)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |_| DomainError::SlugAlreadyExists(article.slug.clone()))
        })?;

        if result.rows_affected() == 0 {
            return Err(article_not_found(article.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM articles WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(article_not_found(id));
        }

        Ok(())
    }
}
