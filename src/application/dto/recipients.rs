use crate::domain::recipient::{Recipient, RecipientSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipientDto {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub address: String,
    pub zipcode: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recipient> for RecipientDto {
    fn from(recipient: Recipient) -> Self {
        let address = recipient.address;
        Self {
            id: recipient.id.into(),
            full_name: recipient.full_name.into(),
            email: recipient.email.into(),
            state: address.state,
            city: address.city,
            neighborhood: address.neighborhood,
            address: address.street,
            zipcode: address.zipcode.into(),
            created_at: recipient.created_at,
            updated_at: recipient.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipientSummaryDto {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
}

impl From<RecipientSummary> for RecipientSummaryDto {
    fn from(summary: RecipientSummary) -> Self {
        Self {
            id: summary.id.into(),
            full_name: summary.full_name.into(),
            email: summary.email.into(),
        }
    }
}
