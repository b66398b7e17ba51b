// src/application/ports/tracking.rs
use crate::domain::order::TrackingCode;

pub trait TrackingCodeGenerator: Send + Sync {
    fn next_code(&self) -> TrackingCode;
}
