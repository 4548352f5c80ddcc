//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blog-core.
//! Each repository handles database operations for a specific domain entity.

mod article;
mod comment;
mod error;
mod member;
mod note;

pub use article::PgArticleRepository;
pub use comment::PgCommentRepository;
pub use member::PgMemberRepository;
pub use note::PgNoteRepository;
