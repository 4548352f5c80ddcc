//! Value objects - immutable types that represent domain concepts

mod roles;
mod slug;
mod snowflake;

pub use roles::{Role, RoleParseError, RoleSet};
pub use slug::{dedupe_slug, slugify};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
