use super::UserCommandService;
use crate::{
    application::{
        authorization::{authorize, ensure_can_manage},
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        authorization::{Action, Resource},
        user::{User, UserId},
    },
};

impl UserCommandService {
    pub async fn block_user(
        &self,
        actor: &AuthenticatedUser,
        user_id: UserId,
    ) -> ApplicationResult<UserDto> {
        let mut target = self.load_status_target(actor, user_id).await?;
        target.block(self.clock.now())?;
        let updated = self.user_repo.update_status(&target).await?;
        tracing::info!(blocked_by = %actor.id, user_id = %updated.id, "user blocked");
        Ok(updated.into())
    }

    pub async fn unblock_user(
        &self,
        actor: &AuthenticatedUser,
        user_id: UserId,
    ) -> ApplicationResult<UserDto> {
        let mut target = self.load_status_target(actor, user_id).await?;
        target.unblock(self.clock.now())?;
        let updated = self.user_repo.update_status(&target).await?;
        tracing::info!(unblocked_by = %actor.id, user_id = %updated.id, "user unblocked");
        Ok(updated.into())
    }

    async fn load_status_target(
        &self,
        actor: &AuthenticatedUser,
        user_id: UserId,
    ) -> ApplicationResult<User> {
        let requester = authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Update,
            Resource::Users,
        )
        .await?;

        let target = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        if target.id == actor.id {
            return Err(ApplicationError::forbidden("cannot change your own status"));
        }
        ensure_can_manage(&requester, &target)?;

        Ok(target)
    }
}
