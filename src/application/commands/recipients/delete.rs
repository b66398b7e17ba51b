use super::RecipientCommandService;
use crate::{
    application::{authorization::authorize, dto::AuthenticatedUser, error::ApplicationResult},
    domain::{
        authorization::{Action, Resource},
        recipient::RecipientId,
    },
};

impl RecipientCommandService {
    /// Tombstones the recipient; its orders keep pointing at the row.
    pub async fn delete_recipient(
        &self,
        actor: &AuthenticatedUser,
        id: RecipientId,
    ) -> ApplicationResult<()> {
        authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Delete,
            Resource::Recipients,
        )
        .await?;

        let recipient = self.load_recipient(id).await?;
        self.recipient_repo
            .soft_delete(recipient.id, self.clock.now())
            .await?;
        tracing::info!(recipient_id = %recipient.id, deleted_by = %actor.id, "recipient deleted");

        Ok(())
    }
}
