//! Delivery management backend: users with roles, recipients, and orders
//! that move from waiting to picked up to delivered.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
