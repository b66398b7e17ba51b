// src/infrastructure/notification/mod.rs
mod dispatcher;
mod email;
mod templates;

pub use dispatcher::QueuedNotificationDispatcher;
pub use email::{EmailMessage, EmailNotifier, LogMailTransport, MailTransport};
pub use templates::{EmailTemplate, render};
