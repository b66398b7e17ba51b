// src/infrastructure/repositories/postgres_recipient.rs
use super::{like_pattern, limit_offset, map_sqlx, row_count};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::recipient::{
    Address, NewRecipient, Recipient, RecipientId, RecipientRepository, RecipientSummary, Zipcode,
};
use crate::domain::shared::{EmailAddress, FullName, PageRequest, Paged};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const RECIPIENT_COLUMNS: &str = "id, full_name, email, state, city, neighborhood, address, zipcode, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresRecipientRepository {
    pool: PgPool,
}

impl PostgresRecipientRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RecipientRow {
    id: Uuid,
    full_name: String,
    email: String,
    state: String,
    city: String,
    neighborhood: String,
    address: String,
    zipcode: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RecipientRow> for Recipient {
    type Error = DomainError;

    fn try_from(row: RecipientRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecipientId::new(row.id),
            full_name: FullName::new(row.full_name)?,
            email: EmailAddress::new(row.email)?,
            address: Address {
                state: row.state,
                city: row.city,
                neighborhood: row.neighborhood,
                street: row.address,
                zipcode: Zipcode::new(&row.zipcode)?,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct RecipientSummaryRow {
    id: Uuid,
    full_name: String,
    email: String,
}

impl TryFrom<RecipientSummaryRow> for RecipientSummary {
    type Error = DomainError;

    fn try_from(row: RecipientSummaryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecipientId::new(row.id),
            full_name: FullName::new(row.full_name)?,
            email: EmailAddress::new(row.email)?,
        })
    }
}

fn push_search_filter(builder: &mut QueryBuilder<'_, Postgres>, search: Option<&str>) {
    builder.push(" WHERE deleted_at IS NULL");
    if let Some(term) = search {
        let pattern = like_pattern(term);
        builder
            .push(" AND (full_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR email ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

#[async_trait]
impl RecipientRepository for PostgresRecipientRepository {
    async fn insert(&self, new_recipient: NewRecipient) -> DomainResult<Recipient> {
        let NewRecipient {
            full_name,
            email,
            address,
            created_at,
        } = new_recipient;

        let row = sqlx::query_as::<_, RecipientRow>(&format!(
            "INSERT INTO recipients (full_name, email, state, city, neighborhood, address, zipcode, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {RECIPIENT_COLUMNS}"
        ))
        .bind(full_name.as_str())
        .bind(email.as_str())
        .bind(&address.state)
        .bind(&address.city)
        .bind(&address.neighborhood)
        .bind(&address.street)
        .bind(address.zipcode.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Recipient::try_from(row)
    }

    async fn find_by_id(&self, id: RecipientId) -> DomainResult<Option<Recipient>> {
        let row = sqlx::query_as::<_, RecipientRow>(&format!(
            "SELECT {RECIPIENT_COLUMNS} FROM recipients WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Recipient::try_from).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Recipient>> {
        let row = sqlx::query_as::<_, RecipientRow>(&format!(
            "SELECT {RECIPIENT_COLUMNS} FROM recipients WHERE email = $1 AND deleted_at IS NULL"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Recipient::try_from).transpose()
    }

    async fn update(&self, recipient: &Recipient) -> DomainResult<Recipient> {
        let row = sqlx::query_as::<_, RecipientRow>(&format!(
            "UPDATE recipients
             SET full_name = $1, email = $2, state = $3, city = $4, neighborhood = $5,
                 address = $6, zipcode = $7, updated_at = $8
             WHERE id = $9 AND deleted_at IS NULL
             RETURNING {RECIPIENT_COLUMNS}"
        ))
        .bind(recipient.full_name.as_str())
        .bind(recipient.email.as_str())
        .bind(&recipient.address.state)
        .bind(&recipient.address.city)
        .bind(&recipient.address.neighborhood)
        .bind(&recipient.address.street)
        .bind(recipient.address.zipcode.as_str())
        .bind(recipient.updated_at)
        .bind(recipient.id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("recipient not found".into()))?;

        Recipient::try_from(row)
    }

    async fn soft_delete(&self, id: RecipientId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE recipients SET deleted_at = $1, updated_at = $1 WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(deleted_at)
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("recipient not found".into()));
        }

        Ok(())
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Paged<Recipient>> {
        let (limit, offset) = limit_offset(page)?;

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(1) FROM recipients WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, RecipientRow>(&format!(
            "SELECT {RECIPIENT_COLUMNS} FROM recipients
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(Recipient::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Paged::new(items, row_count(total)))
    }

    async fn list_summaries(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> DomainResult<Paged<RecipientSummary>> {
        let (limit, offset) = limit_offset(page)?;

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(1) FROM recipients");
        push_search_filter(&mut count, search);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select = QueryBuilder::<Postgres>::new("SELECT id, full_name, email FROM recipients");
        push_search_filter(&mut select, search);
        select
            .push(" ORDER BY full_name ASC, id ASC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = select
            .build_query_as::<RecipientSummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(RecipientSummary::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Paged::new(items, row_count(total)))
    }
}
