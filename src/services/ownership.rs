use crate::error::{AppError, Result};
use crate::middleware::CurrentUser;
use crate::models::Role;

/// Resource-scoped ownership rule: the owner or an admin may act on a
/// resource, nobody else.
///
/// Called after the target record has been loaded; the owner field is only
/// known once the record exists. Role checks alone are insufficient here.
pub fn ensure_owner(user: &CurrentUser, owner_email: &str) -> Result<()> {
    if user.role == Role::Admin {
        return Ok(());
    }

    if user.email == owner_email {
        return Ok(());
    }

    Err(AppError::Forbidden)
}
