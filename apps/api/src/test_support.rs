use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use vagasplus_application::Clock;

use crate::api_services::build_in_memory_app_state;
use crate::state::AppState;

/// Clock that only moves when a test advances it.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub fn in_memory_state() -> (AppState, Arc<ManualClock>) {
    let start = Utc
        .with_ymd_and_hms(2025, 3, 14, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    let clock = Arc::new(ManualClock {
        now: Mutex::new(start),
    });

    (build_in_memory_app_state(clock.clone()), clock)
}
