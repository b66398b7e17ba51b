use super::OrderCommandService;
use crate::{
    application::{
        authorization::authorize,
        dto::{AuthenticatedUser, OrderDto},
        error::{ApplicationError, ApplicationResult},
        ports::media::ImageUpload,
        validation::FieldErrors,
    },
    domain::{
        authorization::{Action, Resource},
        order::OrderId,
    },
};

pub struct DeliverOrderCommand {
    pub order_id: OrderId,
    pub image: Option<ImageUpload>,
}

impl OrderCommandService {
    /// Runs the caller and permission checks of [`Self::deliver_order`] on
    /// their own, so the upload is only read for callers allowed to deliver.
    pub async fn authorize_delivery(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        authorize(
            self.user_repo.as_ref(),
            actor,
            Action::UpdateStatus,
            Resource::Orders,
        )
        .await?;
        Ok(())
    }

    /// Completes a picked-up order once a valid proof-of-delivery photo is supplied.
    pub async fn deliver_order(
        &self,
        actor: &AuthenticatedUser,
        command: DeliverOrderCommand,
    ) -> ApplicationResult<OrderDto> {
        let courier = authorize(
            self.user_repo.as_ref(),
            actor,
            Action::UpdateStatus,
            Resource::Orders,
        )
        .await?;

        let Some(image) = command.image else {
            let mut errors = FieldErrors::default();
            errors.push("image", "image is required");
            return Err(ApplicationError::InvalidFields(errors));
        };
        self.image_validator.validate(&image).await?;

        let mut order = self.load_order(command.order_id).await?;
        let change = order.deliver(self.clock.now())?;
        // TODO: hand the photo to an object store once a storage port exists; it is only validated today.
        let order = self.persist_transition(&change).await?;
        tracing::info!(
            order_id = %order.id,
            deliveryman_id = %courier.id,
            image_bytes = image.bytes.len(),
            "order delivered"
        );

        Ok(order.into())
    }
}
