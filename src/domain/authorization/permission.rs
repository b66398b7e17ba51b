// src/domain/authorization/permission.rs
//! Role based permission table.
//!
//! Every role owns a fixed slice of [`PermissionRule`]s compiled into the
//! binary. Evaluation runs in two passes: any matching `Deny` rule rejects the
//! request, otherwise any matching `Allow` rule grants it. Rule order inside a
//! slice is irrelevant.

use crate::domain::user::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    /// Wildcard action: a rule carrying `Manage` matches every action.
    Manage,
    UpdateStatus,
    TransferOwnership,
}

impl Action {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Manage => "manage",
            Self::UpdateStatus => "update_status",
            Self::TransferOwnership => "transfer_ownership",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Wildcard resource: a rule carrying `All` matches every resource.
    All,
    Users,
    Deliveries,
    Recipients,
    Orders,
    Ownership,
}

impl Resource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Users => "users",
            Self::Deliveries => "deliveries",
            Self::Recipients => "recipients",
            Self::Orders => "orders",
            Self::Ownership => "ownership",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermissionRule {
    pub action: Action,
    pub resource: Resource,
    pub effect: Effect,
}

impl PermissionRule {
    pub const fn allow(action: Action, resource: Resource) -> Self {
        Self {
            action,
            resource,
            effect: Effect::Allow,
        }
    }

    pub const fn deny(action: Action, resource: Resource) -> Self {
        Self {
            action,
            resource,
            effect: Effect::Deny,
        }
    }

    pub fn matches(&self, action: Action, resource: Resource) -> bool {
        (self.resource == Resource::All || self.resource == resource)
            && (self.action == action || self.action == Action::Manage)
    }
}

const OWNER_RULES: &[PermissionRule] = &[PermissionRule::allow(Action::Manage, Resource::All)];

const ADMIN_RULES: &[PermissionRule] = &[
    PermissionRule::allow(Action::Manage, Resource::All),
    PermissionRule::deny(Action::TransferOwnership, Resource::Ownership),
    PermissionRule::deny(Action::UpdateStatus, Resource::Orders),
];

const DELIVERY_MAN_RULES: &[PermissionRule] = &[
    PermissionRule::allow(Action::Read, Resource::Deliveries),
    PermissionRule::allow(Action::Update, Resource::Deliveries),
    PermissionRule::allow(Action::UpdateStatus, Resource::Orders),
];

pub const fn rules_for(role: Role) -> &'static [PermissionRule] {
    match role {
        Role::Owner => OWNER_RULES,
        Role::Admin => ADMIN_RULES,
        Role::DeliveryMan => DELIVERY_MAN_RULES,
    }
}

/// Deny-then-allow evaluation over an arbitrary rule set. An empty set denies.
pub fn evaluate(rules: &[PermissionRule], action: Action, resource: Resource) -> bool {
    let denied = rules
        .iter()
        .filter(|rule| rule.effect == Effect::Deny)
        .any(|rule| rule.matches(action, resource));
    if denied {
        return false;
    }

    rules
        .iter()
        .filter(|rule| rule.effect == Effect::Allow)
        .any(|rule| rule.matches(action, resource))
}

pub fn can(role: Role, action: Action, resource: Resource) -> bool {
    evaluate(rules_for(role), action, resource)
}

pub fn cannot(role: Role, action: Action, resource: Resource) -> bool {
    !can(role, action, resource)
}
