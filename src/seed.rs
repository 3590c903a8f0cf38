//! Isolates the clock used to derive fresh shuffle seeds

use std::{
    cell::Cell,
    time::{Instant, SystemTime, UNIX_EPOCH},
};

#[cfg_attr(test, mockall::automock)]
pub trait SeedSource {
    fn next_seed(&self) -> u64;
}

/// Mixes wall-clock milliseconds with monotonic nanoseconds. Issued seeds strictly increase (wrapping at
/// `u64::MAX`), even when the clocks stall or the wall clock steps backward.
#[derive(Debug)]
pub struct ClockSeedSource {
    started: Instant,
    last: Cell<Option<u64>>,
}

impl ClockSeedSource {
    pub fn new() -> Self {
        ClockSeedSource {
            started: Instant::now(),
            last: Cell::new(None),
        }
    }

    fn clock_reading(&self) -> u64 {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |since_epoch| since_epoch.as_millis() as u64);
        let nanos = self.started.elapsed().as_nanos() as u64;
        millis.wrapping_add(nanos)
    }
}

impl Default for ClockSeedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedSource for ClockSeedSource {
    fn next_seed(&self) -> u64 {
        let seed = next_distinct(self.last.get(), self.clock_reading());
        self.last.set(Some(seed));
        seed
    }
}

fn next_distinct(last: Option<u64>, reading: u64) -> u64 {
    match last {
        Some(last) if reading <= last => last.wrapping_add(1),
        _ => reading,
    }
}
