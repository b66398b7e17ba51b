// src/infrastructure/notification/email.rs
use super::templates::{EmailTemplate, render};
use crate::application::{
    ApplicationResult,
    ports::{
        notification::{Notification, Notifier},
        time::Clock,
    },
};
use async_trait::async_trait;
use std::sync::Arc;

const PICK_UP_SUBJECT: &str = "Pedido em rota de entrega";
const ACCOUNT_CREATED_SUBJECT: &str = "Sua conta FastFeet foi criada";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: EmailMessage) -> ApplicationResult<()>;
}

/// Writes outgoing mail to the log instead of talking to an SMTP server.
#[derive(Default, Clone)]
pub struct LogMailTransport;

#[async_trait]
impl MailTransport for LogMailTransport {
    async fn send(&self, message: EmailMessage) -> ApplicationResult<()> {
        tracing::info!(from = %message.from, to = %message.to, subject = %message.subject, "email sent");
        tracing::debug!(to = %message.to, body = %message.html_body, "email body");
        Ok(())
    }
}

/// Renders notifications into HTML emails.
pub struct EmailNotifier {
    from: String,
    transport: Arc<dyn MailTransport>,
    clock: Arc<dyn Clock>,
}

impl EmailNotifier {
    pub fn new(
        from: impl Into<String>,
        transport: Arc<dyn MailTransport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            from: from.into(),
            transport,
            clock,
        }
    }

    pub fn compose(&self, notification: &Notification) -> EmailMessage {
        let year = self.clock.current_year().to_string();
        let (subject, html_body) = match notification {
            Notification::OrderPickedUp {
                recipient_name,
                tracking_code,
                ..
            } => (
                PICK_UP_SUBJECT,
                render(
                    EmailTemplate::PickUp,
                    &[
                        ("recipient_name", recipient_name.as_str()),
                        ("tracking_code", tracking_code.as_str()),
                        ("current_year", year.as_str()),
                    ],
                ),
            ),
            Notification::AccountCreated {
                full_name,
                temporary_password,
                ..
            } => (
                ACCOUNT_CREATED_SUBJECT,
                render(
                    EmailTemplate::AccountCreated,
                    &[
                        ("full_name", full_name.as_str()),
                        ("temporary_password", temporary_password.as_str()),
                        ("current_year", year.as_str()),
                    ],
                ),
            ),
        };

        EmailMessage {
            from: self.from.clone(),
            to: notification.recipient_email().to_owned(),
            subject: subject.to_owned(),
            html_body,
        }
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn notify(&self, notification: &Notification) -> ApplicationResult<()> {
        let message = self.compose(notification);
        self.transport.send(message).await
    }
}
