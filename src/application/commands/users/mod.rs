mod bootstrap;
mod create;
mod delete;
mod login;
mod service;
mod status;

pub use bootstrap::BootstrapOwnerCommand;
pub use create::CreateUserCommand;
pub use login::{LoginResult, LoginUserCommand};
pub use service::UserCommandService;
