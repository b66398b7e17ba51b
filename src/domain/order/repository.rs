// src/domain/order/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::order::{
    entity::{NewOrder, Order},
    state::OrderStateChange,
    value_objects::{OrderId, OrderStatus, TrackingCode},
};
use crate::domain::shared::{PageRequest, Paged};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Which orders a listing may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderListScope {
    All,
    /// Unclaimed orders plus the ones already assigned to this deliveryman.
    WaitingOrAssignedTo(UserId),
}

impl OrderListScope {
    pub fn includes(&self, order: &Order) -> bool {
        match self {
            Self::All => true,
            Self::WaitingOrAssignedTo(user) => {
                order.status() == OrderStatus::Waiting || order.deliveryman_id() == Some(*user)
            }
        }
    }
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Fails with `NotFound` when the referenced recipient does not exist.
    async fn insert(&self, new_order: NewOrder) -> DomainResult<Order>;

    async fn find_by_id(&self, id: OrderId) -> DomainResult<Option<Order>>;

    async fn find_by_tracking_code(&self, code: TrackingCode) -> DomainResult<Option<Order>>;

    /// Applies `change` atomically if the stored status still equals
    /// `change.expected`; returns `None` when the guard does not hold.
    async fn apply_state_change(&self, change: &OrderStateChange) -> DomainResult<Option<Order>>;

    async fn list_page(&self, scope: OrderListScope, page: PageRequest)
    -> DomainResult<Paged<Order>>;
}
