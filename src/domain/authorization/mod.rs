// src/domain/authorization/mod.rs
mod permission;

pub use permission::{Action, Effect, PermissionRule, Resource, can, cannot, evaluate, rules_for};
