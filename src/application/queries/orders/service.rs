use std::sync::Arc;

use crate::domain::{order::OrderRepository, user::UserRepository};

pub struct OrderQueryService {
    pub(super) order_repo: Arc<dyn OrderRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl OrderQueryService {
    pub fn new(order_repo: Arc<dyn OrderRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            order_repo,
            user_repo,
        }
    }
}
