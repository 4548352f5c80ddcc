//! Note entity - a single rating a member attaches to a comment

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Note entity (integer rating on a comment)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: Snowflake,
    pub comment_id: Snowflake,
    pub author_id: Snowflake,
    pub value: i32,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Create a new Note
    pub fn new(id: Snowflake, comment_id: Snowflake, author_id: Snowflake, value: i32) -> Self {
        Self {
            id,
            comment_id,
            author_id,
            value,
            created_at: Utc::now(),
        }
    }
}

/// Average rating over the notes attached directly to one comment
///
/// round(sum/count, 2) when any notes exist, else 0. Never NaN. Not
/// recursive over replies; each comment averages only its own notes.
#[must_use]
pub fn average_note(notes: &[Note]) -> f64 {
    if notes.is_empty() {
        return 0.0;
    }
    let sum: i64 = notes.iter().map(|n| i64::from(n.value)).sum();
    let avg = sum as f64 / notes.len() as f64;
    (avg * 100.0).round() / 100.0
}
