use chrono::{DateTime, Utc};

use crate::domain::ports::Clock;

// Wall-clock time source for production wiring.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
