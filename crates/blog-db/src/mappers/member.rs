//! Member entity <-> model mapper

use blog_core::entities::Member;
use blog_core::error::DomainError;
use blog_core::value_objects::{RoleSet, Snowflake};

use crate::models::MemberModel;

/// Convert MemberModel to Member entity
///
/// Fallible: the roles column is free-form JSONB, so a row written by a
/// newer deployment could carry a role name this binary does not know.
impl TryFrom<MemberModel> for Member {
    type Error = DomainError;

    fn try_from(model: MemberModel) -> Result<Self, Self::Error> {
        let roles = RoleSet::from_strings(&model.roles.0)
            .map_err(|e| DomainError::DatabaseError(format!("member {}: {e}", model.id)))?;

        Ok(Member {
            id: Snowflake::new(model.id),
            email: model.email,
            username: model.username,
            roles,
            password_hash: model.password_hash,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Role names of a member in the form stored in the roles column
pub fn roles_column(member: &Member) -> sqlx::types::Json<Vec<String>> {
    sqlx::types::Json(member.roles.assigned_strings())
}
