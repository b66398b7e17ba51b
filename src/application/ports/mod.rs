// src/application/ports/mod.rs
pub mod media;
pub mod notification;
pub mod security;
pub mod time;
pub mod tracking;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type TokenManagerPort = dyn security::TokenManager;
pub type ClockPort = dyn time::Clock;
pub type TrackingCodeGeneratorPort = dyn tracking::TrackingCodeGenerator;
pub type ImageValidatorPort = dyn media::ImageValidator;
pub type NotificationDispatcherPort = dyn notification::NotificationDispatcher;
