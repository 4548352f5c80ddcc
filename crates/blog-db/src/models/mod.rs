//! Database models - SQLx-compatible structs for PostgreSQL tables

mod article;
mod comment;
mod member;
mod note;

pub use article::ArticleModel;
pub use comment::CommentModel;
pub use member::MemberModel;
pub use note::NoteModel;
