//! Note service
//!
//! Attaches ratings to comments. Notes are immutable once posted; there is
//! no edit or delete, the average simply absorbs each new value.

use blog_core::authz::Principal;
use blog_core::entities::Note;
use blog_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateNoteRequest};

use super::comment::CommentService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::member::MemberService;

/// Note service
pub struct NoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NoteService<'a> {
    /// Create a new NoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Rate a comment and return it with the recomputed average
    #[instrument(skip(self, request), fields(value = request.value))]
    pub async fn rate_comment(
        &self,
        principal: &Principal,
        comment_id: Snowflake,
        request: CreateNoteRequest,
    ) -> ServiceResult<CommentResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        // Re-resolve the author so the row exists for the foreign key
        let author = MemberService::new(self.ctx)
            .current_member_entity(principal.id)
            .await?;

        let note_id = self.ctx.generate_id();
        let note = Note::new(note_id, comment.id, author.id, request.value);

        self.ctx.note_repo().create(&note).await?;

        info!(note_id = %note_id, comment_id = %comment.id, value = request.value, "Note created");

        // The caller sees the rated comment, average included
        CommentService::new(self.ctx).get_comment(comment.id).await
    }
}

#[cfg(test)]
mod tests {
    // Integration tests would go here with mocked dependencies
}
