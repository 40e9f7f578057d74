//! Time-based id generation for rooms.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

/// Issues millisecond timestamps as ids, bumping by one whenever the clock
/// has not advanced past the last issued value.
///
/// Ids are strictly increasing for the lifetime of the generator, so two
/// requests in the same millisecond still get distinct ids. Seed it with
/// [`MonotonicIds::starting_after`] from the highest stored id to keep that
/// guarantee across restarts.
#[derive(Debug, Default)]
pub struct MonotonicIds {
    last: AtomicU64,
}

impl MonotonicIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator whose ids all exceed `last`.
    pub fn starting_after(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }

    /// Next id for a request arriving at `now`.
    pub fn next_at(&self, now: DateTime<Utc>) -> String {
        let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_ms.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate.to_string(),
                Err(current) => last = current,
            }
        }
    }

    /// Next id using the current clock.
    pub fn next(&self) -> String {
        self.next_at(Utc::now())
    }
}
