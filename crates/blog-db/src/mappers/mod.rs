//! Entity to model mappers
//!
//! This module provides conversions between domain entities (blog-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `TryFrom` where a column needs parsing that can fail

mod article;
mod comment;
mod member;
mod note;

pub use member::roles_column;
