use crate::domain::order::{Order, OrderRecipient};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: Uuid,
    pub title: String,
    pub tracking_code: Uuid,
    #[schema(example = "WAITING")]
    pub status: String,
    pub deliveryman_id: Option<Uuid>,
    pub recipient_id: Uuid,
    pub picked_up_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        let state = order.state;
        Self {
            id: order.id.into(),
            title: order.title.into(),
            tracking_code: order.tracking_code.into(),
            status: state.status().as_str().to_string(),
            deliveryman_id: state.deliveryman_id().map(Into::into),
            recipient_id: order.recipient.id.into(),
            picked_up_at: state.picked_up_at(),
            delivered_at: state.delivered_at(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecipientDto {
    pub id: Uuid,
    pub full_name: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub address: String,
    pub zipcode: String,
}

impl From<OrderRecipient> for OrderRecipientDto {
    fn from(recipient: OrderRecipient) -> Self {
        let address = recipient.address;
        Self {
            id: recipient.id.into(),
            full_name: recipient.full_name.into(),
            state: address.state,
            city: address.city,
            neighborhood: address.neighborhood,
            address: address.street,
            zipcode: address.zipcode.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailsDto {
    pub id: Uuid,
    pub title: String,
    pub tracking_code: Uuid,
    #[schema(example = "PICKED_UP")]
    pub status: String,
    pub deliveryman_id: Option<Uuid>,
    pub picked_up_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub recipient: OrderRecipientDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderDetailsDto {
    fn from(order: Order) -> Self {
        let state = order.state;
        Self {
            id: order.id.into(),
            title: order.title.into(),
            tracking_code: order.tracking_code.into(),
            status: state.status().as_str().to_string(),
            deliveryman_id: state.deliveryman_id().map(Into::into),
            picked_up_at: state.picked_up_at(),
            delivered_at: state.delivered_at(),
            recipient: order.recipient.into(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// Public view for tracking-code lookups; carries no personal data.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderTrackingDto {
    pub tracking_code: Uuid,
    pub title: String,
    #[schema(example = "DONE")]
    pub status: String,
    pub picked_up_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderTrackingDto {
    fn from(order: Order) -> Self {
        let state = order.state;
        Self {
            tracking_code: order.tracking_code.into(),
            title: order.title.into(),
            status: state.status().as_str().to_string(),
            picked_up_at: state.picked_up_at(),
            delivered_at: state.delivered_at(),
            updated_at: order.updated_at,
        }
    }
}
