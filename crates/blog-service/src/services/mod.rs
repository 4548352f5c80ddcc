//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod article;
pub mod auth;
pub mod authorize;
pub mod comment;
pub mod context;
pub mod error;
pub mod member;
pub mod note;

// Re-export all services for convenience
pub use article::ArticleService;
pub use auth::AuthService;
pub use authorize::{require, require_admin};
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use member::MemberService;
pub use note::NoteService;
