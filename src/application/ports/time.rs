// src/application/ports/time.rs
use chrono::{DateTime, Datelike, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar year used in outgoing email footers.
    fn current_year(&self) -> i32 {
        self.now().year()
    }
}
