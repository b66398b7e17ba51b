use super::UserCommandService;
use crate::{
    application::{
        authorization::authorize,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
        ports::notification::Notification,
        validation::FieldErrors,
    },
    domain::{
        authorization::{Action, Resource},
        shared::{Cpf, EmailAddress, FullName},
        user::{NewUser, PasswordHash, Role, User},
    },
};

pub struct CreateUserCommand {
    pub full_name: String,
    pub cpf: String,
    pub email: String,
}

pub(super) struct ValidatedUser {
    pub full_name: FullName,
    pub cpf: Cpf,
    pub email: EmailAddress,
}

impl CreateUserCommand {
    pub(super) fn validate(self) -> ApplicationResult<ValidatedUser> {
        let full_name = FullName::new(self.full_name);
        let cpf = Cpf::parse(&self.cpf);
        let email = EmailAddress::new(self.email);

        FieldErrors::default()
            .check("fullName", &full_name)
            .check("cpf", &cpf)
            .check("email", &email)
            .finish()?;

        Ok(ValidatedUser {
            full_name: full_name?,
            cpf: cpf?,
            email: email?,
        })
    }
}

impl UserCommandService {
    pub async fn create_admin(
        &self,
        actor: &AuthenticatedUser,
        command: CreateUserCommand,
    ) -> ApplicationResult<UserDto> {
        self.create_account(actor, Role::Admin, command).await
    }

    pub async fn create_delivery_man(
        &self,
        actor: &AuthenticatedUser,
        command: CreateUserCommand,
    ) -> ApplicationResult<UserDto> {
        self.create_account(actor, Role::DeliveryMan, command).await
    }

    async fn create_account(
        &self,
        actor: &AuthenticatedUser,
        role: Role,
        command: CreateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let requester = authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Create,
            Resource::Users,
        )
        .await?;
        let details = command.validate()?;
        self.ensure_identity_available(&details).await?;

        let temporary_password = self.password_hasher.generate();
        let user = self
            .create_and_insert_user(details, &temporary_password, role)
            .await?;

        tracing::info!(
            created_by = %requester.id,
            user_id = %user.id,
            role = %user.role,
            "user account created"
        );
        self.notifications.dispatch(Notification::AccountCreated {
            email: user.email.to_string(),
            full_name: user.full_name.to_string(),
            temporary_password,
        });

        Ok(user.into())
    }

    async fn ensure_identity_available(
        &self,
        details: &ValidatedUser,
    ) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(&details.email).await?.is_some() {
            return Err(ApplicationError::conflict("email already in use"));
        }

        if self.user_repo.find_by_cpf(&details.cpf).await?.is_some() {
            return Err(ApplicationError::conflict("cpf already in use"));
        }

        Ok(())
    }

    pub(super) async fn create_and_insert_user(
        &self,
        details: ValidatedUser,
        password: &str,
        role: Role,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(
            details.full_name,
            details.cpf,
            details.email,
            password_hash,
            role,
            self.clock.now(),
        );
        let user = self.user_repo.insert(new_user).await?;

        Ok(user)
    }
}
