// tests/support/mocks/repos.rs
//! メモリ上で動作するリポジトリ実装。Postgres 実装と同じ制約を再現する
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fastfeet_api::domain::errors::{DomainError, DomainResult};
use fastfeet_api::domain::order::{
    NewOrder, Order, OrderId, OrderListScope, OrderRecipient, OrderRepository, OrderState,
    OrderStateChange, TrackingCode,
};
use fastfeet_api::domain::recipient::{
    NewRecipient, Recipient, RecipientId, RecipientRepository, RecipientSummary,
};
use fastfeet_api::domain::shared::{Cpf, EmailAddress, PageRequest, Paged};
use fastfeet_api::domain::user::{NewUser, User, UserId, UserRepository};
use std::sync::{Arc, Mutex};

fn page_of<T: Clone>(items: &[T], page: PageRequest) -> Paged<T> {
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let limit = page.limit() as usize;
    let slice = items.iter().skip(offset).take(limit).cloned().collect();
    Paged::new(slice, items.len() as u64)
}

/* -------------------------------- ユーザー -------------------------------- */

struct StoredUser {
    user: User,
    deleted_at: Option<DateTime<Utc>>,
}

/// 論理削除とユニーク制約を再現するユーザーリポジトリ
#[derive(Default)]
pub struct InMemoryUserRepo {
    rows: Mutex<Vec<StoredUser>>,
}

impl InMemoryUserRepo {
    /// 既存ユーザーを直接投入する
    pub fn seed(&self, user: User) -> User {
        self.rows.lock().unwrap().push(StoredUser {
            user: user.clone(),
            deleted_at: None,
        });
        user
    }

    pub fn is_deleted(&self, id: UserId) -> bool {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .any(|row| row.user.id == id && row.deleted_at.is_some())
    }

    fn find_live(&self, predicate: impl Fn(&User) -> bool) -> Option<User> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.deleted_at.is_none() && predicate(&row.user))
            .map(|row| row.user.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|row| row.deleted_at.is_none()).count() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.user.cpf == new_user.cpf) {
            return Err(DomainError::Conflict("cpf already in use".into()));
        }
        if rows.iter().any(|row| row.user.email == new_user.email) {
            return Err(DomainError::Conflict("email already in use".into()));
        }

        let user = User {
            id: UserId::generate(),
            full_name: new_user.full_name,
            cpf: new_user.cpf,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            status: new_user.status,
            blocked_at: None,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        rows.push(StoredUser {
            user: user.clone(),
            deleted_at: None,
        });
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.find_live(|user| user.id == id))
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> DomainResult<Option<User>> {
        Ok(self.find_live(|user| &user.cpf == cpf))
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        Ok(self.find_live(|user| &user.email == email))
    }

    async fn update_status(&self, user: &User) -> DomainResult<User> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.deleted_at.is_none() && row.user.id == user.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        row.user.status = user.status;
        row.user.blocked_at = user.blocked_at;
        row.user.updated_at = user.updated_at;
        Ok(row.user.clone())
    }

    async fn soft_delete(&self, id: UserId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.deleted_at.is_none() && row.user.id == id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        row.deleted_at = Some(deleted_at);
        Ok(())
    }
}

/* -------------------------------- 受取人 -------------------------------- */

struct StoredRecipient {
    recipient: Recipient,
    deleted_at: Option<DateTime<Utc>>,
}

/// 論理削除を再現する受取人リポジトリ
#[derive(Default)]
pub struct InMemoryRecipientRepo {
    rows: Mutex<Vec<StoredRecipient>>,
}

impl InMemoryRecipientRepo {
    pub fn seed(&self, recipient: Recipient) -> Recipient {
        self.rows.lock().unwrap().push(StoredRecipient {
            recipient: recipient.clone(),
            deleted_at: None,
        });
        recipient
    }

    /// 論理削除済みでも返す。注文の結合読み出し用
    pub fn any_by_id(&self, id: RecipientId) -> Option<Recipient> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.recipient.id == id)
            .map(|row| row.recipient.clone())
    }

    fn live(&self) -> Vec<Recipient> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.deleted_at.is_none())
            .map(|row| row.recipient.clone())
            .collect()
    }
}

#[async_trait]
impl RecipientRepository for InMemoryRecipientRepo {
    async fn insert(&self, new_recipient: NewRecipient) -> DomainResult<Recipient> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|row| row.recipient.email == new_recipient.email)
        {
            return Err(DomainError::Conflict("email already in use".into()));
        }

        let recipient = Recipient {
            id: RecipientId::generate(),
            full_name: new_recipient.full_name,
            email: new_recipient.email,
            address: new_recipient.address,
            created_at: new_recipient.created_at,
            updated_at: new_recipient.created_at,
        };
        rows.push(StoredRecipient {
            recipient: recipient.clone(),
            deleted_at: None,
        });
        Ok(recipient)
    }

    async fn find_by_id(&self, id: RecipientId) -> DomainResult<Option<Recipient>> {
        Ok(self.live().into_iter().find(|r| r.id == id))
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Recipient>> {
        Ok(self.live().into_iter().find(|r| &r.email == email))
    }

    async fn update(&self, recipient: &Recipient) -> DomainResult<Recipient> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|row| row.recipient.id != recipient.id && row.recipient.email == recipient.email)
        {
            return Err(DomainError::Conflict("email already in use".into()));
        }
        let row = rows
            .iter_mut()
            .find(|row| row.deleted_at.is_none() && row.recipient.id == recipient.id)
            .ok_or_else(|| DomainError::NotFound("recipient not found".into()))?;
        row.recipient = recipient.clone();
        Ok(row.recipient.clone())
    }

    async fn soft_delete(&self, id: RecipientId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.deleted_at.is_none() && row.recipient.id == id)
            .ok_or_else(|| DomainError::NotFound("recipient not found".into()))?;
        row.deleted_at = Some(deleted_at);
        Ok(())
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Paged<Recipient>> {
        let mut items = self.live();
        items.reverse();
        Ok(page_of(&items, page))
    }

    async fn list_summaries(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> DomainResult<Paged<RecipientSummary>> {
        let needle = search.map(str::to_lowercase);
        let mut items: Vec<RecipientSummary> = self
            .live()
            .iter()
            .filter(|r| match &needle {
                Some(term) => {
                    r.full_name.as_str().to_lowercase().contains(term)
                        || r.email.as_str().to_lowercase().contains(term)
                }
                None => true,
            })
            .map(Recipient::summary)
            .collect();
        items.sort_by(|a, b| a.full_name.as_str().cmp(b.full_name.as_str()));
        Ok(page_of(&items, page))
    }
}

/* -------------------------------- 注文 -------------------------------- */

struct StoredOrder {
    id: OrderId,
    title: fastfeet_api::domain::order::OrderTitle,
    tracking_code: TrackingCode,
    state: OrderState,
    recipient_id: RecipientId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// ステータスガード付き更新を再現する注文リポジトリ
pub struct InMemoryOrderRepo {
    rows: Mutex<Vec<StoredOrder>>,
    recipients: Arc<InMemoryRecipientRepo>,
}

impl InMemoryOrderRepo {
    pub fn new(recipients: Arc<InMemoryRecipientRepo>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            recipients,
        }
    }

    fn hydrate(&self, row: &StoredOrder) -> DomainResult<Order> {
        let recipient = self
            .recipients
            .any_by_id(row.recipient_id)
            .ok_or_else(|| DomainError::Persistence("dangling recipient reference".into()))?;
        Ok(Order {
            id: row.id,
            title: row.title.clone(),
            tracking_code: row.tracking_code,
            state: row.state,
            recipient: OrderRecipient {
                id: recipient.id,
                full_name: recipient.full_name,
                email: recipient.email,
                address: recipient.address,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }

    fn find_where(&self, predicate: impl Fn(&StoredOrder) -> bool) -> DomainResult<Option<Order>> {
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .find(|row| predicate(*row))
            .map(|row| self.hydrate(row))
            .transpose()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepo {
    async fn insert(&self, new_order: NewOrder) -> DomainResult<Order> {
        if self.recipients.any_by_id(new_order.recipient_id).is_none() {
            return Err(DomainError::NotFound("recipient not found".into()));
        }
        let row = StoredOrder {
            id: OrderId::generate(),
            title: new_order.title,
            tracking_code: new_order.tracking_code,
            state: OrderState::Waiting,
            recipient_id: new_order.recipient_id,
            created_at: new_order.created_at,
            updated_at: new_order.created_at,
        };
        let order = self.hydrate(&row)?;
        self.rows.lock().unwrap().push(row);
        Ok(order)
    }

    async fn find_by_id(&self, id: OrderId) -> DomainResult<Option<Order>> {
        self.find_where(|row| row.id == id)
    }

    async fn find_by_tracking_code(&self, code: TrackingCode) -> DomainResult<Option<Order>> {
        self.find_where(|row| row.tracking_code == code)
    }

    async fn apply_state_change(&self, change: &OrderStateChange) -> DomainResult<Option<Order>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows
            .iter_mut()
            .find(|row| row.id == change.order_id && row.state.status() == change.expected)
        else {
            return Ok(None);
        };
        row.state = change.next;
        row.updated_at = change.updated_at;
        self.hydrate(row).map(Some)
    }

    async fn list_page(
        &self,
        scope: OrderListScope,
        page: PageRequest,
    ) -> DomainResult<Paged<Order>> {
        let rows = self.rows.lock().unwrap();
        let mut items = Vec::new();
        for row in rows.iter().rev() {
            let order = self.hydrate(row)?;
            if scope.includes(&order) {
                items.push(order);
            }
        }
        Ok(page_of(&items, page))
    }
}
