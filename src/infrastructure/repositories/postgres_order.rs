// src/infrastructure/repositories/postgres_order.rs
use super::{limit_offset, map_sqlx, row_count};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::order::{
    NewOrder, Order, OrderId, OrderListScope, OrderRecipient, OrderRepository, OrderState,
    OrderStateChange, OrderStatus, OrderTitle, TrackingCode,
};
use crate::domain::recipient::{Address, RecipientId, Zipcode};
use crate::domain::shared::{EmailAddress, FullName, PageRequest, Paged};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

// Recipient columns are read even for tombstoned recipients.
const ORDER_PROJECTION: &str = "o.id, o.title, o.tracking_code, o.status, o.deliveryman_id,
       o.picked_up_at, o.delivered_at, o.created_at, o.updated_at,
       r.id AS recipient_id, r.full_name AS recipient_full_name, r.email AS recipient_email,
       r.state AS recipient_state, r.city AS recipient_city,
       r.neighborhood AS recipient_neighborhood, r.address AS recipient_address,
       r.zipcode AS recipient_zipcode";

#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(
        &self,
        predicate: &str,
        value: Uuid,
    ) -> DomainResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_PROJECTION}
             FROM orders o JOIN recipients r ON r.id = o.recipient_id
             WHERE {predicate} = $1"
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Order::try_from).transpose()
    }
}

#[derive(Debug, FromRow)]
struct OrderRow {
    id: Uuid,
    title: String,
    tracking_code: Uuid,
    status: String,
    deliveryman_id: Option<Uuid>,
    picked_up_at: Option<DateTime<Utc>>,
    delivered_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    recipient_id: Uuid,
    recipient_full_name: String,
    recipient_email: String,
    recipient_state: String,
    recipient_city: String,
    recipient_neighborhood: String,
    recipient_address: String,
    recipient_zipcode: String,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status: OrderStatus = row.status.parse()?;
        let state = OrderState::from_parts(
            status,
            row.deliveryman_id.map(UserId::new),
            row.picked_up_at,
            row.delivered_at,
        )?;

        Ok(Self {
            id: OrderId::new(row.id),
            title: OrderTitle::new(row.title)?,
            tracking_code: TrackingCode::new(row.tracking_code),
            state,
            recipient: OrderRecipient {
                id: RecipientId::new(row.recipient_id),
                full_name: FullName::new(row.recipient_full_name)?,
                email: EmailAddress::new(row.recipient_email)?,
                address: Address {
                    state: row.recipient_state,
                    city: row.recipient_city,
                    neighborhood: row.recipient_neighborhood,
                    street: row.recipient_address,
                    zipcode: Zipcode::new(&row.recipient_zipcode)?,
                },
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn insert(&self, new_order: NewOrder) -> DomainResult<Order> {
        let NewOrder {
            title,
            tracking_code,
            recipient_id,
            created_at,
        } = new_order;

        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "WITH o AS (
                 INSERT INTO orders (title, tracking_code, status, recipient_id, created_at, updated_at)
                 VALUES ($1, $2, $3, $4, $5, $5)
                 RETURNING *
             )
             SELECT {ORDER_PROJECTION}
             FROM o JOIN recipients r ON r.id = o.recipient_id"
        ))
        .bind(title.as_str())
        .bind(tracking_code.as_uuid())
        .bind(OrderStatus::Waiting.as_str())
        .bind(recipient_id.as_uuid())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Order::try_from(row)
    }

    async fn find_by_id(&self, id: OrderId) -> DomainResult<Option<Order>> {
        self.fetch_one_where("o.id", id.as_uuid()).await
    }

    async fn find_by_tracking_code(&self, code: TrackingCode) -> DomainResult<Option<Order>> {
        self.fetch_one_where("o.tracking_code", code.as_uuid()).await
    }

    async fn apply_state_change(&self, change: &OrderStateChange) -> DomainResult<Option<Order>> {
        let next = change.next;

        // The status guard makes concurrent transitions race on a single row update.
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "WITH o AS (
                 UPDATE orders
                 SET status = $1, deliveryman_id = $2, picked_up_at = $3, delivered_at = $4, updated_at = $5
                 WHERE id = $6 AND status = $7
                 RETURNING *
             )
             SELECT {ORDER_PROJECTION}
             FROM o JOIN recipients r ON r.id = o.recipient_id"
        ))
        .bind(next.status().as_str())
        .bind(next.deliveryman_id().map(Uuid::from))
        .bind(next.picked_up_at())
        .bind(next.delivered_at())
        .bind(change.updated_at)
        .bind(change.order_id.as_uuid())
        .bind(change.expected.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Order::try_from).transpose()
    }

    async fn list_page(
        &self,
        scope: OrderListScope,
        page: PageRequest,
    ) -> DomainResult<Paged<Order>> {
        let (limit, offset) = limit_offset(page)?;
        let courier = match scope {
            OrderListScope::All => None,
            OrderListScope::WaitingOrAssignedTo(user) => Some(user.as_uuid()),
        };

        // `$1 IS NULL` disables the courier filter for unrestricted listings.
        let filter = "($1::uuid IS NULL OR o.status = 'WAITING' OR o.deliveryman_id = $1)";

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(1) FROM orders o WHERE {filter}"))
                .bind(courier)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_PROJECTION}
             FROM orders o JOIN recipients r ON r.id = o.recipient_id
             WHERE {filter}
             ORDER BY o.created_at DESC, o.id DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(courier)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(Order::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Paged::new(items, row_count(total)))
    }
}
