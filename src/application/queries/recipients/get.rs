use super::RecipientQueryService;
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

impl RecipientQueryService {
    pub async fn get_recipient(
        &self,
        actor: &AuthenticatedUser,
        id: RecipientId,
    ) -> ApplicationResult<RecipientDto> {
        authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Read,
            Resource::Recipients,
        )
        .await?;

        self.recipient_repo
            .find_by_id(id)
            .await?
            .map(RecipientDto::from)
            .ok_or_else(|| ApplicationError::not_found("recipient not found"))
    }
}
