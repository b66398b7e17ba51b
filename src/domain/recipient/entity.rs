// src/domain/recipient/entity.rs
use crate::domain::recipient::value_objects::{RecipientId, Zipcode};
use crate::domain::shared::{EmailAddress, FullName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub street: String,
    pub zipcode: Zipcode,
}

#[derive(Debug, Clone)]
pub struct Recipient {
    pub id: RecipientId,
    pub full_name: FullName,
    pub email: EmailAddress,
    pub address: Address,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipient {
    pub fn replace_details(
        &mut self,
        full_name: FullName,
        email: EmailAddress,
        address: Address,
        now: DateTime<Utc>,
    ) {
        self.full_name = full_name;
        self.email = email;
        self.address = address;
        self.updated_at = now;
    }

    pub fn summary(&self) -> RecipientSummary {
        RecipientSummary {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewRecipient {
    pub full_name: FullName,
    pub email: EmailAddress,
    pub address: Address,
    pub created_at: DateTime<Utc>,
}

/// Lightweight projection used by pickers and search boxes.
#[derive(Debug, Clone)]
pub struct RecipientSummary {
    pub id: RecipientId,
    pub full_name: FullName,
    pub email: EmailAddress,
}
