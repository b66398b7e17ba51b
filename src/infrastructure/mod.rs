pub mod database;
pub mod media;
pub mod notification;
pub mod repositories;
pub mod security;
pub mod system;
