// src/domain/recipient/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Address, NewRecipient, Recipient, RecipientSummary};
pub use repository::RecipientRepository;
pub use value_objects::{RecipientId, Zipcode};
