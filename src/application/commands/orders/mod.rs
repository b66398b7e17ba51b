mod create;
mod deliver;
mod pick_up;
mod service;

pub use create::CreateOrderCommand;
pub use deliver::DeliverOrderCommand;
pub use service::OrderCommandService;
