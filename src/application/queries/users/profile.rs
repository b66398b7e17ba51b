use super::UserQueryService;
use crate::application::{
    authorization::resolve_actor,
    dto::{AuthenticatedUser, UserDto},
    error::ApplicationResult,
};

impl UserQueryService {
    /// Profile of the caller. Needs no permission beyond a live, unblocked account.
    pub async fn me(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        let user = resolve_actor(self.user_repo.as_ref(), actor).await?;
        Ok(user.into())
    }
}
