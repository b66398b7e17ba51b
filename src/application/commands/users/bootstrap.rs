use super::{UserCommandService, create::CreateUserCommand, login::MIN_PASSWORD_LENGTH};
use crate::{
    application::{dto::UserDto, error::ApplicationResult, validation::FieldErrors},
    domain::user::Role,
};

/// Seeds the first account of an empty installation.
pub struct BootstrapOwnerCommand {
    pub full_name: String,
    pub cpf: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Creates the owner when no user exists yet; returns `None` otherwise.
    pub async fn bootstrap_owner(
        &self,
        command: BootstrapOwnerCommand,
    ) -> ApplicationResult<Option<UserDto>> {
        if self.user_repo.count().await? > 0 {
            return Ok(None);
        }

        let mut errors = FieldErrors::default();
        if command.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push(
                "password",
                format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
            );
        }
        errors.finish()?;

        let details = CreateUserCommand {
            full_name: command.full_name,
            cpf: command.cpf,
            email: command.email,
        }
        .validate()?;

        let owner = self
            .create_and_insert_user(details, &command.password, Role::Owner)
            .await?;
        tracing::info!(user_id = %owner.id, "owner account bootstrapped");

        Ok(Some(owner.into()))
    }
}
