use super::OrderCommandService;
use crate::{
    application::{
        authorization::authorize,
        dto::{AuthenticatedUser, OrderDto},
        error::ApplicationResult,
    },
    domain::{
        authorization::{Action, Resource},
        order::OrderId,
    },
};

impl OrderCommandService {
    /// Claims a waiting order for the calling deliveryman and notifies the recipient.
    pub async fn pick_up_order(
        &self,
        actor: &AuthenticatedUser,
        order_id: OrderId,
    ) -> ApplicationResult<OrderDto> {
        let courier = authorize(
            self.user_repo.as_ref(),
            actor,
            Action::UpdateStatus,
            Resource::Orders,
        )
        .await?;

        let mut order = self.load_order(order_id).await?;
        let change = order.pick_up(courier.id, self.clock.now())?;
        let order = self.persist_transition(&change).await?;
        tracing::info!(order_id = %order.id, deliveryman_id = %courier.id, "order picked up");

        self.notifications.notify_pickup(
            order.recipient.email.as_str(),
            order.recipient.full_name.as_str(),
            order.tracking_code,
        );

        Ok(order.into())
    }
}
