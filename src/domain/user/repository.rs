// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::shared::{Cpf, EmailAddress};
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::UserId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Identity lookups. Soft-deleted users are invisible to every method.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_cpf(&self, cpf: &Cpf) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>>;

    /// Persists `status`, `blocked_at` and `updated_at` of `user`.
    async fn update_status(&self, user: &User) -> DomainResult<User>;

    async fn soft_delete(&self, id: UserId, deleted_at: DateTime<Utc>) -> DomainResult<()>;
}
