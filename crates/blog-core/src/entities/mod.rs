//! Domain entities - core business objects

mod article;
mod comment;
mod member;
mod note;

pub use article::Article;
pub use comment::{children_index, Comment};
pub use member::Member;
pub use note::{average_note, Note};
