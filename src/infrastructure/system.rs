use crate::application::ports::{time::Clock, tracking::TrackingCodeGenerator};
use crate::domain::order::TrackingCode;
use chrono::{DateTime, Utc};

#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random v4 UUIDs; collisions are left to the unique index on `orders.tracking_code`.
#[derive(Default, Clone)]
pub struct UuidTrackingCodeGenerator;

impl TrackingCodeGenerator for UuidTrackingCodeGenerator {
    fn next_code(&self) -> TrackingCode {
        TrackingCode::generate()
    }
}
