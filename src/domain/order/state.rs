// src/domain/order/state.rs
//! Order lifecycle: `Waiting -> PickedUp -> Done`.
//!
//! The deliveryman and the timestamps live inside the state variants, so an
//! order cannot carry a deliveryman while waiting or a delivery time before
//! it was picked up.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::order::value_objects::{OrderId, OrderStatus};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    Waiting,
    PickedUp {
        deliveryman_id: UserId,
        picked_up_at: DateTime<Utc>,
    },
    Done {
        deliveryman_id: UserId,
        picked_up_at: DateTime<Utc>,
        delivered_at: DateTime<Utc>,
    },
}

impl OrderState {
    pub const fn status(&self) -> OrderStatus {
        match self {
            Self::Waiting => OrderStatus::Waiting,
            Self::PickedUp { .. } => OrderStatus::PickedUp,
            Self::Done { .. } => OrderStatus::Done,
        }
    }

    pub const fn deliveryman_id(&self) -> Option<UserId> {
        match self {
            Self::Waiting => None,
            Self::PickedUp { deliveryman_id, .. } | Self::Done { deliveryman_id, .. } => {
                Some(*deliveryman_id)
            }
        }
    }

    pub const fn picked_up_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Waiting => None,
            Self::PickedUp { picked_up_at, .. } | Self::Done { picked_up_at, .. } => {
                Some(*picked_up_at)
            }
        }
    }

    pub const fn delivered_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Done { delivered_at, .. } => Some(*delivered_at),
            _ => None,
        }
    }

    /// Rebuilds a state from flat storage columns, rejecting inconsistent combinations.
    pub fn from_parts(
        status: OrderStatus,
        deliveryman_id: Option<UserId>,
        picked_up_at: Option<DateTime<Utc>>,
        delivered_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        match (status, deliveryman_id, picked_up_at, delivered_at) {
            (OrderStatus::Waiting, None, None, None) => Ok(Self::Waiting),
            (OrderStatus::PickedUp, Some(deliveryman_id), Some(picked_up_at), None) => {
                Ok(Self::PickedUp {
                    deliveryman_id,
                    picked_up_at,
                })
            }
            (OrderStatus::Done, Some(deliveryman_id), Some(picked_up_at), Some(delivered_at)) => {
                Ok(Self::Done {
                    deliveryman_id,
                    picked_up_at,
                    delivered_at,
                })
            }
            (status, ..) => Err(DomainError::Persistence(format!(
                "order columns are inconsistent with status {status}"
            ))),
        }
    }

    pub(super) fn pick_up(self, deliveryman_id: UserId, now: DateTime<Utc>) -> DomainResult<Self> {
        match self {
            Self::Waiting => Ok(Self::PickedUp {
                deliveryman_id,
                picked_up_at: now,
            }),
            other => Err(invalid_transition(other.status(), OrderStatus::PickedUp)),
        }
    }

    pub(super) fn deliver(self, now: DateTime<Utc>) -> DomainResult<Self> {
        match self {
            Self::PickedUp {
                deliveryman_id,
                picked_up_at,
            } => Ok(Self::Done {
                deliveryman_id,
                picked_up_at,
                delivered_at: now,
            }),
            other => Err(invalid_transition(other.status(), OrderStatus::Done)),
        }
    }
}

fn invalid_transition(from: OrderStatus, to: OrderStatus) -> DomainError {
    DomainError::InvalidTransition(format!("order cannot move from {from} to {to}"))
}

/// Guarded write produced by a successful transition. Storage must apply it
/// only while the order still has `expected` status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStateChange {
    pub order_id: OrderId,
    pub expected: OrderStatus,
    pub next: OrderState,
    pub updated_at: DateTime<Utc>,
}
