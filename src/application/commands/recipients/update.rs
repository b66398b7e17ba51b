use super::{RecipientCommandService, RecipientInput};
use crate::{
    application::{
        authorization::authorize,
        dto::{AuthenticatedUser, RecipientDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        authorization::{Action, Resource},
        recipient::RecipientId,
    },
};

pub struct UpdateRecipientCommand {
    pub id: RecipientId,
    pub input: RecipientInput,
}

impl RecipientCommandService {
    pub async fn update_recipient(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateRecipientCommand,
    ) -> ApplicationResult<RecipientDto> {
        authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Update,
            Resource::Recipients,
        )
        .await?;

        let mut recipient = self.load_recipient(command.id).await?;
        let details = command.input.validate()?;

        // Uniqueness only matters when the address actually changes.
        if details.email != recipient.email
            && self
                .recipient_repo
                .find_by_email(&details.email)
                .await?
                .is_some()
        {
            return Err(ApplicationError::conflict("email already in use"));
        }

        recipient.replace_details(
            details.full_name,
            details.email,
            details.address,
            self.clock.now(),
        );
        let updated = self.recipient_repo.update(&recipient).await?;

        Ok(updated.into())
    }
}
