mod get;
mod list;
mod service;
mod track;

pub use list::ListOrdersQuery;
pub use service::OrderQueryService;
