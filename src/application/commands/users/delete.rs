use super::UserCommandService;
use crate::{
    application::{
        authorization::{authorize, ensure_can_manage},
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        authorization::{Action, Resource},
        user::UserId,
    },
};

impl UserCommandService {
    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        user_id: UserId,
    ) -> ApplicationResult<()> {
        let requester = authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Delete,
            Resource::Users,
        )
        .await?;

        let target = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        if target.id == actor.id {
            return Err(ApplicationError::forbidden("cannot delete your own account"));
        }
        ensure_can_manage(&requester, &target)?;

        self.user_repo
            .soft_delete(target.id, self.clock.now())
            .await?;
        tracing::info!(deleted_by = %actor.id, user_id = %target.id, "user deleted");

        Ok(())
    }
}
