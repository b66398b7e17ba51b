// src/domain/order/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::order::state::{OrderState, OrderStateChange};
use crate::domain::order::value_objects::{OrderId, OrderStatus, OrderTitle, TrackingCode};
use crate::domain::recipient::{Address, RecipientId};
use crate::domain::shared::{EmailAddress, FullName};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Recipient data loaded together with an order. Kept even when the
/// recipient has since been tombstoned.
#[derive(Debug, Clone)]
pub struct OrderRecipient {
    pub id: RecipientId,
    pub full_name: FullName,
    pub email: EmailAddress,
    pub address: Address,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub title: OrderTitle,
    pub tracking_code: TrackingCode,
    pub state: OrderState,
    pub recipient: OrderRecipient,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub const fn status(&self) -> OrderStatus {
        self.state.status()
    }

    pub const fn deliveryman_id(&self) -> Option<UserId> {
        self.state.deliveryman_id()
    }

    /// Whether a deliveryman other than `user` has claimed this order.
    pub fn is_claimed_by_other(&self, user: UserId) -> bool {
        self.deliveryman_id().is_some_and(|assigned| assigned != user)
    }

    /// `Waiting -> PickedUp`. Leaves the order untouched on failure.
    pub fn pick_up(
        &mut self,
        deliveryman_id: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<OrderStateChange> {
        let expected = self.status();
        let next = self.state.pick_up(deliveryman_id, now)?;
        Ok(self.commit(expected, next, now))
    }

    /// `PickedUp -> Done`. Leaves the order untouched on failure.
    pub fn deliver(&mut self, now: DateTime<Utc>) -> DomainResult<OrderStateChange> {
        let expected = self.status();
        let next = self.state.deliver(now)?;
        Ok(self.commit(expected, next, now))
    }

    fn commit(
        &mut self,
        expected: OrderStatus,
        next: OrderState,
        now: DateTime<Utc>,
    ) -> OrderStateChange {
        self.state = next;
        self.updated_at = now;
        OrderStateChange {
            order_id: self.id,
            expected,
            next,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub title: OrderTitle,
    pub tracking_code: TrackingCode,
    pub recipient_id: RecipientId,
    pub created_at: DateTime<Utc>,
}
