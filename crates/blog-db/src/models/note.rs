//! Note database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for notes table
#[derive(Debug, Clone, FromRow)]
pub struct NoteModel {
    pub id: i64,
    pub comment_id: i64,
    pub author_id: i64,
    pub value: i32,
    pub created_at: DateTime<Utc>,
}
