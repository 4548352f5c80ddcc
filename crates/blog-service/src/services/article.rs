//! Article service
//!
//! Article CRUD with slug derivation. Creation is admin-only; edits and
//! deletes go through the voters so an admin or the author may perform them.

use std::collections::HashSet;

use blog_core::authz::{Attribute, Principal, Subject};
use blog_core::entities::Article;
use blog_core::value_objects::{dedupe_slug, slugify};
use blog_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    ArticleResponse, ArticleWithAuthor, CreateArticleRequest, MemberResponse, UpdateArticleRequest,
};

use super::authorize::{require, require_admin};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::member::MemberService;

/// Article service
pub struct ArticleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ArticleService<'a> {
    /// Create a new ArticleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List articles, newest first
    #[instrument(skip(self))]
    pub async fn list_articles(
        &self,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<ArticleResponse>> {
        let articles = self.ctx.article_repo().list(limit, offset).await?;

        let mut responses = Vec::with_capacity(articles.len());
        for article in articles {
            let author = self.author_of(&article).await?;
            responses.push(ArticleResponse::from(ArticleWithAuthor { article, author }));
        }

        Ok(responses)
    }

    /// Get a single article by its slug
    #[instrument(skip(self))]
    pub async fn get_article(&self, slug: &str) -> ServiceResult<ArticleResponse> {
        let article = self.find_by_slug(slug).await?;
        let author = self.author_of(&article).await?;

        Ok(ArticleResponse::from(ArticleWithAuthor { article, author }))
    }

    /// Publish a new article
    ///
    /// Admin-only. The slug is derived from the title, with a numeric
    /// suffix when the base slug is already taken.
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_article(
        &self,
        principal: &Principal,
        request: CreateArticleRequest,
    ) -> ServiceResult<ArticleResponse> {
        require_admin(principal)?;

        // Re-resolve the author so the row exists for the foreign key
        let author = MemberService::new(self.ctx)
            .current_member_entity(principal.id)
            .await?;

        let slug = self.unique_slug(&request.title, None).await?;

        let article_id = self.ctx.generate_id();
        let mut article = Article::new(article_id, author.id, request.title, slug);
        article.set_summary(Some(request.summary));
        article.set_content(Some(request.content));

        self.ctx.article_repo().create(&article).await?;

        info!(article_id = %article_id, slug = %article.slug, "Article created");

        Ok(ArticleResponse::from(ArticleWithAuthor {
            article,
            author: MemberResponse::from(&author),
        }))
    }

    /// Update an article addressed by its slug
    ///
    /// Absent fields keep their stored value. A changed title regenerates
    /// the slug, so the response may carry a new address.
    #[instrument(skip(self, request))]
    pub async fn update_article(
        &self,
        principal: &Principal,
        slug: &str,
        request: UpdateArticleRequest,
    ) -> ServiceResult<ArticleResponse> {
        let mut article = self.find_by_slug(slug).await?;

        require(Attribute::Edit, Subject::Article(&article), principal)?;

        if let Some(title) = request.title {
            if title != article.title {
                let new_slug = self.unique_slug(&title, Some(article.id)).await?;
                article.retitle(title, new_slug);
            }
        }
        if let Some(summary) = request.summary {
            article.set_summary(Some(summary));
        }
        if let Some(content) = request.content {
            article.set_content(Some(content));
        }

        self.ctx.article_repo().update(&article).await?;

        info!(article_id = %article.id, slug = %article.slug, "Article updated");

        let author = self.author_of(&article).await?;
        Ok(ArticleResponse::from(ArticleWithAuthor { article, author }))
    }

    /// Delete an article addressed by its slug
    ///
    /// Cascades to the article's comments and their notes.
    #[instrument(skip(self))]
    pub async fn delete_article(&self, principal: &Principal, slug: &str) -> ServiceResult<()> {
        let article = self.find_by_slug(slug).await?;

        require(Attribute::Delete, Subject::Article(&article), principal)?;

        self.ctx.article_repo().delete(article.id).await?;

        info!(article_id = %article.id, slug = %slug, "Article deleted");

        Ok(())
    }

    /// Load an article by slug or fail with not-found
    async fn find_by_slug(&self, slug: &str) -> ServiceResult<Article> {
        self.ctx
            .article_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Article", slug.to_string()))
    }

    /// Resolve the article's author for projection
    async fn author_of(&self, article: &Article) -> ServiceResult<MemberResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_id(article.author_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Article author not found"))?;

        Ok(MemberResponse::from(&member))
    }

    /// Derive a slug from the title that no other article uses
    ///
    /// `exclude` skips the article being retitled so an unchanged base
    /// does not collide with itself.
    async fn unique_slug(
        &self,
        title: &str,
        exclude: Option<Snowflake>,
    ) -> ServiceResult<String> {
        let base = slugify(title);
        let taken: HashSet<String> = self
            .ctx
            .article_repo()
            .slugs_with_prefix(&base, exclude)
            .await?
            .into_iter()
            .collect();

        Ok(dedupe_slug(&base, |candidate| taken.contains(candidate)))
    }
}

#[cfg(test)]
mod tests {
    // Integration tests would go here with mocked dependencies
}
