// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_order;
mod postgres_recipient;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_order::PostgresOrderRepository;
pub use postgres_recipient::PostgresRecipientRepository;
pub use postgres_user::PostgresUserRepository;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::PageRequest;

/// `LIMIT` / `OFFSET` bind values for a page request.
fn limit_offset(page: PageRequest) -> DomainResult<(i64, i64)> {
    let offset = i64::try_from(page.offset())
        .map_err(|_| DomainError::Validation("page index is out of range".into()))?;
    Ok((i64::from(page.limit()), offset))
}

fn row_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}

/// Escapes `%`, `_` and `\` so user input is matched literally inside `ILIKE`.
fn like_pattern(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len() + 2);
    escaped.push('%');
    for ch in search.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}
