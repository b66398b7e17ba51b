mod get;
mod list;
mod service;

pub use list::{ListRecipientSummariesQuery, ListRecipientsQuery};
pub use service::RecipientQueryService;
