//! # blog-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ArticleResponse, AuthResponse, CommentResponse, CreateArticleRequest, CreateCommentRequest,
    CreateNoteRequest, HealthResponse, LoginRequest, MemberResponse, NoteResponse,
    ReadinessResponse, RefreshTokenRequest, RegisterRequest, UpdateArticleRequest,
    UpdateCommentRequest,
};
pub use services::{
    ArticleService, AuthService, CommentService, MemberService, NoteService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
