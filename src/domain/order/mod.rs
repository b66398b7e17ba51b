// src/domain/order/mod.rs
pub mod entity;
pub mod repository;
pub mod state;
pub mod value_objects;

pub use entity::{NewOrder, Order, OrderRecipient};
pub use repository::{OrderListScope, OrderRepository};
pub use state::{OrderState, OrderStateChange};
pub use value_objects::{OrderId, OrderStatus, OrderTitle, TrackingCode};
