use chrono::{DateTime, Utc};

/// Clock trait - the time source actors stamp posts with.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
