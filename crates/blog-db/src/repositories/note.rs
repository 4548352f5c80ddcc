//! PostgreSQL implementation of NoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Note;
use blog_core::traits::{NoteRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::models::NoteModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NoteRepository
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    #[instrument(skip(self))]
    async fn find_by_comment(&self, comment_id: Snowflake) -> RepoResult<Vec<Note>> {
        let results = sqlx::query_as::<_, NoteModel>(
            r"
            SELECT id, comment_id, author_id, value, created_at
            FROM notes
            WHERE comment_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(comment_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Note::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_article(&self, article_id: Snowflake) -> RepoResult<Vec<Note>> {
        // One query for the whole comment tree of an article
        let results = sqlx::query_as::<_, NoteModel>(
            r"
            SELECT n.id, n.comment_id, n.author_id, n.value, n.created_at
            FROM notes n
            JOIN comments c ON c.id = n.comment_id
            WHERE c.article_id = $1
            ORDER BY n.id ASC
            ",
        )
        .bind(article_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Note::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, note: &Note) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO notes (id, comment_id, author_id, value, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(note.id.into_inner())
        .bind(note.comment_id.into_inner())
        .bind(note.author_id.into_inner())
        .bind(note.value)
        .bind(note.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
