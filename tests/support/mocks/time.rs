// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use oseberg_backend::application::ports::{time::Clock, util::IdGenerator};
use oseberg_backend::domain::document::DocumentId;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Advances one second per reading so documents get distinct timestamps.
#[derive(Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        Self::start() + Duration::seconds(tick)
    }
}

#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> DocumentId {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        DocumentId::parse(format!("{n:024x}")).unwrap()
    }
}
