use super::{RecipientCommandService, RecipientInput};
use crate::{
    application::{
        authorization::authorize,
        dto::{AuthenticatedUser, RecipientDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        authorization::{Action, Resource},
        recipient::NewRecipient,
    },
};

pub struct CreateRecipientCommand {
    pub input: RecipientInput,
}

impl RecipientCommandService {
    pub async fn create_recipient(
        &self,
        actor: &AuthenticatedUser,
        command: CreateRecipientCommand,
    ) -> ApplicationResult<RecipientDto> {
        authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Create,
            Resource::Recipients,
        )
        .await?;
        let details = command.input.validate()?;

        if self
            .recipient_repo
            .find_by_email(&details.email)
            .await?
            .is_some()
        {
            return Err(ApplicationError::conflict("email already in use"));
        }

        let recipient = self
            .recipient_repo
            .insert(NewRecipient {
                full_name: details.full_name,
                email: details.email,
                address: details.address,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(recipient_id = %recipient.id, created_by = %actor.id, "recipient created");

        Ok(recipient.into())
    }
}
