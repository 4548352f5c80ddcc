//! Authorization voters for articles and comments
//!
//! A voter is a pure function over (attribute, subject, principal). Each
//! voter participates only for its own subject kind and abstains otherwise;
//! the recognized attribute set is closed by the `Attribute` enum. The
//! affirmative combinator grants as soon as any voter grants; anything
//! else, including a board of abstentions, denies.
//!
//! All I/O (loading the subject, resolving the principal) happens before
//! these functions run; they never block and never touch shared state.

use crate::entities::{Article, Comment};
use crate::value_objects::{RoleSet, Snowflake};

/// Action requested against a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Edit,
    View,
    Delete,
}

/// The loaded entity an action targets
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    Article(&'a Article),
    Comment(&'a Comment),
}

impl Subject<'_> {
    /// Identity of the subject's author
    #[must_use]
    pub fn owner(&self) -> Option<Snowflake> {
        match self {
            Subject::Article(article) => Some(article.author_id),
            Subject::Comment(comment) => Some(comment.author_id),
        }
    }
}

/// Authenticated member identity a decision is made for
///
/// Carries exactly what the voters need: the stable id and the role set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: Snowflake,
    pub roles: RoleSet,
}

impl Principal {
    pub fn new(id: Snowflake, roles: RoleSet) -> Self {
        Self { id, roles }
    }

    /// Check whether this principal holds the admin role
    #[inline]
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.roles.is_admin()
    }
}

/// One voter's verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Granted,
    Denied,
    Abstain,
}

/// Combined outcome of a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Decision {
    Granted,
    Denied,
}

impl Decision {
    #[inline]
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, Decision::Granted)
    }
}

/// Voter specialized to article subjects
pub fn article_voter(
    attribute: Attribute,
    subject: Subject<'_>,
    principal: Option<&Principal>,
) -> Vote {
    match subject {
        Subject::Article(article) => owner_vote(attribute, Some(article.author_id), principal),
        Subject::Comment(_) => Vote::Abstain,
    }
}

/// Voter specialized to comment subjects
pub fn comment_voter(
    attribute: Attribute,
    subject: Subject<'_>,
    principal: Option<&Principal>,
) -> Vote {
    match subject {
        Subject::Comment(comment) => owner_vote(attribute, Some(comment.author_id), principal),
        Subject::Article(_) => Vote::Abstain,
    }
}

/// Ownership rule shared by both voters
///
/// 1. No principal: deny.
/// 2. Admin principal: grant, whatever the attribute.
/// 3. Otherwise grant iff the subject has an author and it is the
///    principal; an ownerless subject denies.
fn owner_vote(
    attribute: Attribute,
    owner: Option<Snowflake>,
    principal: Option<&Principal>,
) -> Vote {
    let Some(principal) = principal else {
        return Vote::Denied;
    };
    if principal.is_admin() {
        return Vote::Granted;
    }
    let owns = owner.is_some_and(|author| author == principal.id);
    match attribute {
        // Owner has full control; no attribute gets a separate policy today
        Attribute::Edit | Attribute::View | Attribute::Delete => {
            if owns {
                Vote::Granted
            } else {
                Vote::Denied
            }
        }
    }
}

/// Ask every voter and combine affirmatively
pub fn decide(attribute: Attribute, subject: Subject<'_>, principal: Option<&Principal>) -> Decision {
    let votes = [
        article_voter(attribute, subject, principal),
        comment_voter(attribute, subject, principal),
    ];

    if votes.contains(&Vote::Granted) {
        return Decision::Granted;
    }
    Decision::Denied
}
