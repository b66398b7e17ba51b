// src/application/ports/notification.rs
use crate::application::ApplicationResult;
use crate::domain::order::TrackingCode;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    OrderPickedUp {
        recipient_email: String,
        recipient_name: String,
        tracking_code: String,
    },
    AccountCreated {
        email: String,
        full_name: String,
        temporary_password: String,
    },
}

impl Notification {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::OrderPickedUp { .. } => "order_picked_up",
            Self::AccountCreated { .. } => "account_created",
        }
    }

    pub fn recipient_email(&self) -> &str {
        match self {
            Self::OrderPickedUp {
                recipient_email, ..
            } => recipient_email,
            Self::AccountCreated { email, .. } => email,
        }
    }
}

/// Hands notifications off to a background executor. `dispatch` must return
/// immediately and never report delivery failures to the caller.
pub trait NotificationDispatcher: Send + Sync {
    fn dispatch(&self, notification: Notification);

    fn notify_pickup(&self, recipient_email: &str, recipient_name: &str, tracking_code: TrackingCode) {
        self.dispatch(Notification::OrderPickedUp {
            recipient_email: recipient_email.to_string(),
            recipient_name: recipient_name.to_string(),
            tracking_code: tracking_code.to_string(),
        });
    }
}

/// Performs the actual delivery; driven by the dispatcher's worker.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> ApplicationResult<()>;
}
