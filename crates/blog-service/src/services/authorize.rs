//! Authorization helpers bridging voter decisions to service errors
//!
//! Voters are pure functions in the domain layer; these helpers turn a
//! denial into the error the API layer maps to 403.

use blog_core::authz::{decide, Attribute, Principal, Subject};
use blog_core::DomainError;

use super::error::{ServiceError, ServiceResult};

/// Require that the principal may perform `attribute` on `subject`
///
/// # Errors
/// Returns `AccessDenied` when the voters deny the action.
pub fn require(
    attribute: Attribute,
    subject: Subject<'_>,
    principal: &Principal,
) -> ServiceResult<()> {
    if decide(attribute, subject, Some(principal)).is_granted() {
        Ok(())
    } else {
        Err(ServiceError::Domain(DomainError::AccessDenied))
    }
}

/// Require that the principal holds the admin role
///
/// # Errors
/// Returns `AccessDenied` for non-admin principals.
pub fn require_admin(principal: &Principal) -> ServiceResult<()> {
    if principal.is_admin() {
        Ok(())
    } else {
        Err(ServiceError::Domain(DomainError::AccessDenied))
    }
}
