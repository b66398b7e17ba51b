use super::OrderCommandService;
use crate::{
    application::{
        authorization::authorize,
        dto::{AuthenticatedUser, OrderDto},
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::{
        authorization::{Action, Resource},
        order::{NewOrder, OrderTitle},
        recipient::RecipientId,
    },
};

pub struct CreateOrderCommand {
    pub title: String,
    pub recipient_id: String,
}

impl OrderCommandService {
    pub async fn create_order(
        &self,
        actor: &AuthenticatedUser,
        command: CreateOrderCommand,
    ) -> ApplicationResult<OrderDto> {
        let requester = authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Create,
            Resource::Orders,
        )
        .await?;

        let title = OrderTitle::new(command.title);
        let recipient_id = command.recipient_id.parse::<RecipientId>();
        FieldErrors::default()
            .check("title", &title)
            .check("recipientId", &recipient_id)
            .finish()?;
        let recipient_id = recipient_id?;

        if self.recipient_repo.find_by_id(recipient_id).await?.is_none() {
            return Err(ApplicationError::not_found("recipient not found"));
        }

        let order = self
            .order_repo
            .insert(NewOrder {
                title: title?,
                tracking_code: self.tracking_codes.next_code(),
                recipient_id,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(
            order_id = %order.id,
            created_by = %requester.id,
            recipient_id = %recipient_id,
            "order created"
        );

        Ok(order.into())
    }
}
