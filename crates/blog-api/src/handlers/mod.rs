//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod articles;
pub mod auth;
pub mod comments;
pub mod health;
pub mod members;
