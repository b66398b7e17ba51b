use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::{shared::Cpf, user::User},
};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

pub struct LoginUserCommand {
    pub cpf: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let cpf = Cpf::parse(&command.cpf);
        let mut errors = FieldErrors::default().check("cpf", &cpf);
        if command.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push(
                "password",
                format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
            );
        }
        errors.finish()?;

        let user = self.find_and_authenticate_user(&cpf?, &command.password).await?;

        let token = self
            .token_manager
            .issue(TokenSubject { user_id: user.id })
            .await?;
        tracing::info!(user_id = %user.id, role = %user.role, "user logged in");

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        cpf: &Cpf,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_cpf(cpf)
            .await?
            .ok_or(ApplicationError::InvalidCredentials)?;

        if user.is_blocked() {
            return Err(ApplicationError::UserBlocked);
        }

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
