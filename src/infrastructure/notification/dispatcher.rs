// src/infrastructure/notification/dispatcher.rs
use crate::application::ports::notification::{Notification, NotificationDispatcher, Notifier};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Queues notifications and delivers them on a detached worker task, so a
/// cancelled request never cancels a pending delivery.
#[derive(Clone)]
pub struct QueuedNotificationDispatcher {
    sender: mpsc::Sender<Notification>,
}

impl QueuedNotificationDispatcher {
    /// Must be called from within a tokio runtime.
    pub fn spawn(notifier: Arc<dyn Notifier>, capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        tokio::spawn(run_worker(receiver, notifier));
        Self { sender }
    }
}

async fn run_worker(mut receiver: mpsc::Receiver<Notification>, notifier: Arc<dyn Notifier>) {
    while let Some(notification) = receiver.recv().await {
        let notifier = Arc::clone(&notifier);
        tokio::spawn(async move {
            if let Err(err) = notifier.notify(&notification).await {
                tracing::warn!(
                    kind = notification.kind(),
                    to = notification.recipient_email(),
                    error = %err,
                    "notification delivery failed"
                );
            }
        });
    }
    tracing::debug!("notification queue closed");
}

impl NotificationDispatcher for QueuedNotificationDispatcher {
    fn dispatch(&self, notification: Notification) {
        if let Err(err) = self.sender.try_send(notification) {
            let (reason, dropped) = match err {
                mpsc::error::TrySendError::Full(n) => ("queue full", n),
                mpsc::error::TrySendError::Closed(n) => ("queue closed", n),
            };
            tracing::warn!(
                kind = dropped.kind(),
                to = dropped.recipient_email(),
                reason,
                "notification dropped"
            );
        }
    }
}
