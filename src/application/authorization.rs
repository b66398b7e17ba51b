// src/application/authorization.rs
//! Shared gate run by every use case: resolve the caller, then consult the
//! permission table. Existence and business checks come after these.

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::authorization::{Action, Resource, can};
use crate::domain::user::{Role, User, UserRepository};

/// Loads the user a token was issued for. A deleted account is treated as
/// unauthenticated; a blocked one is rejected outright.
pub async fn resolve_actor(
    users: &dyn UserRepository,
    principal: &AuthenticatedUser,
) -> ApplicationResult<User> {
    let user = users
        .find_by_id(principal.id)
        .await?
        .ok_or_else(|| ApplicationError::unauthorized("session user no longer exists"))?;

    if user.is_blocked() {
        return Err(ApplicationError::UserBlocked);
    }

    Ok(user)
}

pub fn ensure_permission(role: Role, action: Action, resource: Resource) -> ApplicationResult<()> {
    if can(role, action, resource) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "missing permission {action}:{resource}"
        )))
    }
}

pub async fn authorize(
    users: &dyn UserRepository,
    principal: &AuthenticatedUser,
    action: Action,
    resource: Resource,
) -> ApplicationResult<User> {
    let user = resolve_actor(users, principal).await?;
    ensure_permission(user.role, action, resource)?;
    Ok(user)
}

/// The Owner account can only be changed by a role that may transfer
/// ownership. Any other target is covered by the caller's own permission.
pub fn ensure_can_manage(requester: &User, target: &User) -> ApplicationResult<()> {
    if target.role == Role::Owner {
        ensure_permission(
            requester.role,
            Action::TransferOwnership,
            Resource::Ownership,
        )?;
    }
    Ok(())
}
