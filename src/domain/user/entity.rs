// src/domain/user/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::{Cpf, EmailAddress, FullName};
use crate::domain::user::value_objects::{PasswordHash, Role, UserId, UserStatus};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub full_name: FullName,
    pub cpf: Cpf,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub status: UserStatus,
    pub blocked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_blocked(&self) -> bool {
        self.status == UserStatus::Blocked
    }

    pub fn block(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.is_blocked() {
            return Err(DomainError::Conflict("user is already blocked".into()));
        }
        self.status = UserStatus::Blocked;
        self.blocked_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    pub fn unblock(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if !self.is_blocked() {
            return Err(DomainError::Conflict("user is not blocked".into()));
        }
        self.status = UserStatus::Active;
        self.blocked_at = None;
        self.updated_at = now;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: FullName,
    pub cpf: Cpf,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub const fn new(
        full_name: FullName,
        cpf: Cpf,
        email: EmailAddress,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            full_name,
            cpf,
            email,
            password_hash,
            role,
            status: UserStatus::Active,
            created_at,
        }
    }
}
