//! Comment service
//!
//! Threaded comments under articles. Trees are assembled at read time from
//! the flat per-article arena, and every projection carries the average of
//! the notes attached directly to it.

use std::collections::HashMap;

use blog_core::authz::{Attribute, Principal, Subject};
use blog_core::entities::{average_note, children_index, Article, Comment, Note};
use blog_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    CommentResponse, CommentWithDetails, CreateCommentRequest, MemberResponse,
    UpdateCommentRequest,
};

use super::authorize::{require, require_admin};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::member::MemberService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment tree of an article, roots oldest first
    #[instrument(skip(self))]
    pub async fn comments_for_article(&self, slug: &str) -> ServiceResult<Vec<CommentResponse>> {
        let article = self.find_article(slug).await?;

        let comments = self
            .ctx
            .comment_repo()
            .find_by_article(article.id)
            .await?;
        let notes = self.ctx.note_repo().find_by_article(article.id).await?;
        let authors = self.load_authors(&comments).await?;

        let arena: HashMap<Snowflake, &Comment> = comments.iter().map(|c| (c.id, c)).collect();
        let children_of = children_index(&comments);
        let notes_by_comment = group_notes(notes);

        let mut roots = Vec::new();
        if let Some(root_ids) = children_of.get(&None) {
            for id in root_ids {
                roots.push(project_subtree(
                    *id,
                    &arena,
                    &children_of,
                    &notes_by_comment,
                    &authors,
                )?);
            }
        }

        Ok(roots)
    }

    /// One comment with its full reply subtree
    #[instrument(skip(self))]
    pub async fn get_comment(&self, comment_id: Snowflake) -> ServiceResult<CommentResponse> {
        let comment = self.find_comment(comment_id).await?;

        // The subtree is carved out of the article's full arena
        let comments = self
            .ctx
            .comment_repo()
            .find_by_article(comment.article_id)
            .await?;
        let notes = self
            .ctx
            .note_repo()
            .find_by_article(comment.article_id)
            .await?;
        let authors = self.load_authors(&comments).await?;

        let arena: HashMap<Snowflake, &Comment> = comments.iter().map(|c| (c.id, c)).collect();
        let children_of = children_index(&comments);
        let notes_by_comment = group_notes(notes);

        project_subtree(comment.id, &arena, &children_of, &notes_by_comment, &authors)
    }

    /// Post a top-level comment on an article addressed by slug
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        principal: &Principal,
        slug: &str,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let article = self.find_article(slug).await?;

        // Re-resolve the author so the row exists for the foreign key
        let author = MemberService::new(self.ctx)
            .current_member_entity(principal.id)
            .await?;

        let comment_id = self.ctx.generate_id();
        let comment = Comment::new(comment_id, article.id, author.id, request.content);

        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment_id, article_id = %article.id, "Comment created");

        Ok(CommentResponse::from(CommentWithDetails {
            comment,
            author: MemberResponse::from(&author),
            average_note: 0.0,
            children: Vec::new(),
        }))
    }

    /// Post a reply under an existing comment
    ///
    /// The reply lands on the parent's article. Only the new reply body is
    /// validated; the parent is loaded as stored.
    #[instrument(skip(self, request))]
    pub async fn create_reply(
        &self,
        principal: &Principal,
        parent_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let parent = self.find_comment(parent_id).await?;

        let author = MemberService::new(self.ctx)
            .current_member_entity(principal.id)
            .await?;

        let comment_id = self.ctx.generate_id();
        let reply = Comment::new_reply(comment_id, &parent, author.id, request.content);

        self.ctx.comment_repo().create(&reply).await?;

        info!(comment_id = %comment_id, parent_id = %parent.id, "Reply created");

        Ok(CommentResponse::from(CommentWithDetails {
            comment: reply,
            author: MemberResponse::from(&author),
            average_note: 0.0,
            children: Vec::new(),
        }))
    }

    /// Edit a comment body
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        principal: &Principal,
        comment_id: Snowflake,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let mut comment = self.find_comment(comment_id).await?;

        require(Attribute::Edit, Subject::Comment(&comment), principal)?;

        comment.edit(request.content);
        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, "Comment updated");

        self.get_comment(comment_id).await
    }

    /// Delete a comment and its reply subtree
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        principal: &Principal,
        comment_id: Snowflake,
    ) -> ServiceResult<()> {
        let comment = self.find_comment(comment_id).await?;

        require(Attribute::Delete, Subject::Comment(&comment), principal)?;

        self.ctx.comment_repo().delete(comment.id).await?;

        info!(comment_id = %comment_id, "Comment deleted");

        Ok(())
    }

    /// Flat moderation list across all articles, newest first
    ///
    /// Admin-only. Children are not assembled here; replies appear as their
    /// own rows with `parent_id` set.
    #[instrument(skip(self))]
    pub async fn list_comments(
        &self,
        principal: &Principal,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<CommentResponse>> {
        require_admin(principal)?;

        let comments = self.ctx.comment_repo().list(limit, offset).await?;
        let authors = self.load_authors(&comments).await?;

        let mut responses = Vec::with_capacity(comments.len());
        for comment in comments {
            let notes = self.ctx.note_repo().find_by_comment(comment.id).await?;
            let author = authors
                .get(&comment.author_id)
                .cloned()
                .ok_or_else(|| ServiceError::internal("Comment author not found"))?;

            responses.push(CommentResponse::from(CommentWithDetails {
                average_note: average_note(&notes),
                comment,
                author,
                children: Vec::new(),
            }));
        }

        Ok(responses)
    }

    /// Load an article by slug or fail with not-found
    async fn find_article(&self, slug: &str) -> ServiceResult<Article> {
        self.ctx
            .article_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Article", slug.to_string()))
    }

    /// Load a comment by id or fail with not-found
    async fn find_comment(&self, comment_id: Snowflake) -> ServiceResult<Comment> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))
    }

    /// Resolve every distinct author among the given comments
    async fn load_authors(
        &self,
        comments: &[Comment],
    ) -> ServiceResult<HashMap<Snowflake, MemberResponse>> {
        let mut authors = HashMap::new();
        for comment in comments {
            if authors.contains_key(&comment.author_id) {
                continue;
            }
            let member = self
                .ctx
                .member_repo()
                .find_by_id(comment.author_id)
                .await?
                .ok_or_else(|| ServiceError::internal("Comment author not found"))?;
            authors.insert(comment.author_id, MemberResponse::from(&member));
        }
        Ok(authors)
    }
}

/// Group notes under the comment they rate
fn group_notes(notes: Vec<Note>) -> HashMap<Snowflake, Vec<Note>> {
    let mut grouped: HashMap<Snowflake, Vec<Note>> = HashMap::new();
    for note in notes {
        grouped.entry(note.comment_id).or_default().push(note);
    }
    grouped
}

/// Project one comment and its reply subtree out of the loaded arena
fn project_subtree(
    comment_id: Snowflake,
    arena: &HashMap<Snowflake, &Comment>,
    children_of: &HashMap<Option<Snowflake>, Vec<Snowflake>>,
    notes_by_comment: &HashMap<Snowflake, Vec<Note>>,
    authors: &HashMap<Snowflake, MemberResponse>,
) -> ServiceResult<CommentResponse> {
    let comment = *arena
        .get(&comment_id)
        .ok_or_else(|| ServiceError::internal("Comment missing from its article arena"))?;

    let author = authors
        .get(&comment.author_id)
        .cloned()
        .ok_or_else(|| ServiceError::internal("Comment author not found"))?;

    let average = notes_by_comment
        .get(&comment.id)
        .map_or(0.0, |notes| average_note(notes));

    let mut children = Vec::new();
    if let Some(child_ids) = children_of.get(&Some(comment.id)) {
        for child_id in child_ids {
            children.push(project_subtree(
                *child_id,
                arena,
                children_of,
                notes_by_comment,
                authors,
            )?);
        }
    }

    Ok(CommentResponse::from(CommentWithDetails {
        comment: comment.clone(),
        author,
        average_note: average,
        children,
    }))
}
