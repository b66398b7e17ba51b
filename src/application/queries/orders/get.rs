use super::OrderQueryService;
use crate::{
    application::{
        authorization::authorize,
        dto::{AuthenticatedUser, OrderDetailsDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        authorization::{Action, Resource},
        order::OrderId,
        user::Role,
    },
};

impl OrderQueryService {
    pub async fn get_order(
        &self,
        actor: &AuthenticatedUser,
        order_id: OrderId,
    ) -> ApplicationResult<OrderDetailsDto> {
        let user = authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Read,
            Resource::Deliveries,
        )
        .await?;

        let order = self
            .order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("order not found"))?;

        if user.role == Role::DeliveryMan && order.is_claimed_by_other(user.id) {
            return Err(ApplicationError::NotAssignedToOrder);
        }

        Ok(order.into())
    }
}
