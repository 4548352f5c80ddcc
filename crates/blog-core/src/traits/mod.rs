//! Domain traits

mod repositories;

pub use repositories::{
    ArticleRepository, CommentRepository, MemberRepository, NoteRepository, RepoResult,
};
