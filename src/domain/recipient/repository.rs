// src/domain/recipient/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::recipient::{
    entity::{NewRecipient, Recipient, RecipientSummary},
    value_objects::RecipientId,
};
use crate::domain::shared::{EmailAddress, PageRequest, Paged};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Recipient storage. Tombstoned rows are excluded from every lookup and listing.
#[async_trait]
pub trait RecipientRepository: Send + Sync {
    async fn insert(&self, new_recipient: NewRecipient) -> DomainResult<Recipient>;

    async fn find_by_id(&self, id: RecipientId) -> DomainResult<Option<Recipient>>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Recipient>>;

    async fn update(&self, recipient: &Recipient) -> DomainResult<Recipient>;

    async fn soft_delete(&self, id: RecipientId, deleted_at: DateTime<Utc>) -> DomainResult<()>;

    async fn list_page(&self, page: PageRequest) -> DomainResult<Paged<Recipient>>;

    /// Case-insensitive substring match of `search` over name and email.
    async fn list_summaries(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> DomainResult<Paged<RecipientSummary>>;
}
