//! Access-control decisions over loaded entities

mod voter;

pub use voter::{
    article_voter, comment_voter, decide, Attribute, Decision, Principal, Subject, Vote,
};
