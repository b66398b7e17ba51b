use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{
        media::ImageValidator, notification::NotificationDispatcher, time::Clock,
        tracking::TrackingCodeGenerator,
    },
};
use crate::domain::{
    order::{Order, OrderId, OrderRepository, OrderStateChange},
    recipient::RecipientRepository,
    user::UserRepository,
};

pub struct OrderCommandService {
    pub(super) order_repo: Arc<dyn OrderRepository>,
    pub(super) recipient_repo: Arc<dyn RecipientRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) image_validator: Arc<dyn ImageValidator>,
    pub(super) notifications: Arc<dyn NotificationDispatcher>,
    pub(super) tracking_codes: Arc<dyn TrackingCodeGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl OrderCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        order_repo: Arc<dyn OrderRepository>,
        recipient_repo: Arc<dyn RecipientRepository>,
        user_repo: Arc<dyn UserRepository>,
        image_validator: Arc<dyn ImageValidator>,
        notifications: Arc<dyn NotificationDispatcher>,
        tracking_codes: Arc<dyn TrackingCodeGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            order_repo,
            recipient_repo,
            user_repo,
            image_validator,
            notifications,
            tracking_codes,
            clock,
        }
    }

    pub(super) async fn load_order(&self, id: OrderId) -> ApplicationResult<Order> {
        self.order_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("order not found"))
    }

    /// Writes a transition through the storage status guard. Losing a race
    /// against another transition surfaces as `InvalidTransition`.
    pub(super) async fn persist_transition(
        &self,
        change: &OrderStateChange,
    ) -> ApplicationResult<Order> {
        self.order_repo
            .apply_state_change(change)
            .await?
            .ok_or_else(|| {
                ApplicationError::invalid_transition(format!(
                    "order is no longer {}",
                    change.expected
                ))
            })
    }
}
