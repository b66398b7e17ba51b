use std::sync::Arc;

use crate::domain::{recipient::RecipientRepository, user::UserRepository};

pub struct RecipientQueryService {
    pub(super) recipient_repo: Arc<dyn RecipientRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl RecipientQueryService {
    pub fn new(
        recipient_repo: Arc<dyn RecipientRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            recipient_repo,
            user_repo,
        }
    }
}
