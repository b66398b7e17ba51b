mod create;
mod delete;
mod input;
mod service;
mod update;

pub use create::CreateRecipientCommand;
pub use input::RecipientInput;
pub use service::RecipientCommandService;
pub use update::UpdateRecipientCommand;
