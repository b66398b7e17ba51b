use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::time::Clock,
};
use crate::domain::{
    recipient::{Recipient, RecipientId, RecipientRepository},
    user::UserRepository,
};

pub struct RecipientCommandService {
    pub(super) recipient_repo: Arc<dyn RecipientRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl RecipientCommandService {
    pub fn new(
        recipient_repo: Arc<dyn RecipientRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            recipient_repo,
            user_repo,
            clock,
        }
    }

    pub(super) async fn load_recipient(&self, id: RecipientId) -> ApplicationResult<Recipient> {
        self.recipient_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("recipient not found"))
    }
}
