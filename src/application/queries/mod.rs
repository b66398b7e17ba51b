pub mod orders;
pub mod recipients;
pub mod users;
