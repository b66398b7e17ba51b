// src/domain/shared/mod.rs
mod cpf;
mod email;
mod identifier;
mod pagination;
mod text;

pub use cpf::Cpf;
pub use email::EmailAddress;
pub(crate) use identifier::uuid_identifier;
pub use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE_INDEX, MAX_LIMIT, PageRequest, Paged};
pub use text::{FullName, MAX_TEXT_LENGTH, required_text};
