//! Note entity <-> model mapper

use blog_core::entities::Note;
use blog_core::value_objects::Snowflake;

use crate::models::NoteModel;

/// Convert NoteModel to Note entity
impl From<NoteModel> for Note {
    fn from(model: NoteModel) -> Self {
        Note {
            id: Snowflake::new(model.id),
            comment_id: Snowflake::new(model.comment_id),
            author_id: Snowflake::new(model.author_id),
            value: model.value,
            created_at: model.created_at,
        }
    }
}
