// src/domain/mod.rs
pub mod authorization;
pub mod errors;
pub mod order;
pub mod recipient;
pub mod shared;
pub mod user;
