//! # blog-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! authorization voters. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod authz;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use authz::{article_voter, comment_voter, decide, Attribute, Decision, Principal, Subject};
pub use entities::{average_note, children_index, Article, Comment, Member, Note};
pub use error::DomainError;
pub use traits::{
    ArticleRepository, CommentRepository, MemberRepository, NoteRepository, RepoResult,
};
pub use value_objects::{
    dedupe_slug, slugify, Role, RoleSet, Snowflake, SnowflakeGenerator, SnowflakeParseError,
};
