// tests/support/builders.rs
//! テストデータ用ビルダー
use chrono::{DateTime, Utc};
use fastfeet_api::domain::recipient::{Address, Recipient, RecipientId, Zipcode};
use fastfeet_api::domain::shared::{Cpf, EmailAddress, FullName};
use fastfeet_api::domain::user::{PasswordHash, Role, User, UserId, UserStatus};

use super::mocks::fixed_now;

/// `User` を組み立てるビルダー。パスワードは StrictPasswordHasher 形式でハッシュされる
pub struct UserBuilder {
    role: Role,
    full_name: String,
    cpf: String,
    email: String,
    password: String,
    status: UserStatus,
    created_at: DateTime<Utc>,
}

impl UserBuilder {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            full_name: "Joana Lima".into(),
            cpf: "52998224725".into(),
            email: "joana@fastfeet.test".into(),
            password: "secret123".into(),
            status: UserStatus::Active,
            created_at: fixed_now(),
        }
    }

    pub fn owner() -> Self {
        Self::new(Role::Owner)
    }

    pub fn admin() -> Self {
        Self::new(Role::Admin)
            .cpf("11144477735")
            .email("admin@fastfeet.test")
    }

    pub fn delivery_man() -> Self {
        Self::new(Role::DeliveryMan)
            .cpf("12345678909")
            .email("courier@fastfeet.test")
    }

    pub fn full_name(mut self, value: &str) -> Self {
        self.full_name = value.into();
        self
    }

    pub fn cpf(mut self, value: &str) -> Self {
        self.cpf = value.into();
        self
    }

    pub fn email(mut self, value: &str) -> Self {
        self.email = value.into();
        self
    }

    pub fn password(mut self, value: &str) -> Self {
        self.password = value.into();
        self
    }

    pub fn blocked(mut self) -> Self {
        self.status = UserStatus::Blocked;
        self
    }

    pub fn build(self) -> User {
        let blocked_at = (self.status == UserStatus::Blocked).then_some(self.created_at);
        User {
            id: UserId::generate(),
            full_name: FullName::new(self.full_name).unwrap(),
            cpf: Cpf::parse(&self.cpf).unwrap(),
            email: EmailAddress::new(self.email).unwrap(),
            password_hash: PasswordHash::new(format!("hashed:{}", self.password)).unwrap(),
            role: self.role,
            status: self.status,
            blocked_at,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// `Recipient` を組み立てるビルダー
pub struct RecipientBuilder {
    full_name: String,
    email: String,
    zipcode: String,
}

impl Default for RecipientBuilder {
    fn default() -> Self {
        Self {
            full_name: "Maria Souza".into(),
            email: "maria@example.com".into(),
            zipcode: "01310-100".into(),
        }
    }
}

impl RecipientBuilder {
    pub fn full_name(mut self, value: &str) -> Self {
        self.full_name = value.into();
        self
    }

    pub fn email(mut self, value: &str) -> Self {
        self.email = value.into();
        self
    }

    pub fn build(self) -> Recipient {
        Recipient {
            id: RecipientId::generate(),
            full_name: FullName::new(self.full_name).unwrap(),
            email: EmailAddress::new(self.email).unwrap(),
            address: Address {
                state: "SP".into(),
                city: "Sao Paulo".into(),
                neighborhood: "Bela Vista".into(),
                street: "Avenida Paulista, 1000".into(),
                zipcode: Zipcode::new(&self.zipcode).unwrap(),
            },
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
