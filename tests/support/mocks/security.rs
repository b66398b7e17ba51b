// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use fastfeet_api::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use fastfeet_api::domain::user::UserId;

use super::time::fixed_now;

/// 新規アカウントに払い出される固定の仮パスワード
pub const TEMPORARY_PASSWORD: &str = "tmpPass1";

const TOKEN_PREFIX: &str = "token-";

/// ユーザー ID からテスト用トークン文字列を組み立てる
pub fn token_for(user_id: UserId) -> String {
    format!("{TOKEN_PREFIX}{user_id}")
}

/// "hashed:" を前置するだけのハッシャー。照合は厳密に行う
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::InvalidCredentials)
        }
    }

    fn generate(&self) -> String {
        TEMPORARY_PASSWORD.to_string()
    }
}

/// "token-<uuid>" 形式のトークンを受け付けるトークンマネージャ
pub struct PrefixTokenManager;

#[async_trait]
impl TokenManager for PrefixTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = fixed_now();
        let expires_at = issued_at + Duration::hours(6);
        Ok(AuthTokenDto {
            token: token_for(subject.user_id),
            issued_at,
            expires_at,
            expires_in: (expires_at - issued_at).num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let id = token
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|raw| raw.parse::<UserId>().ok())
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;
        let issued_at = fixed_now();
        Ok(AuthenticatedUser {
            id,
            issued_at,
            expires_at: issued_at + Duration::hours(6),
        })
    }
}
