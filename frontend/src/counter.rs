use std::rc::Rc;

use rand::Rng;

use crate::timers::Scheduler;

pub const SEED: u64 = 5243;
pub const TICK_MS: u32 = 3000;
pub const FLASH_MS: u32 = 300;
pub const FLASH_COLOR: &str = "#fff";

// A tick bumps the count only when the roll lands above this.
const BUMP_THRESHOLD: f64 = 0.6;

/// Displayed member count. Only ever grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserCounter {
    count: u64,
}

impl Default for UserCounter {
    fn default() -> Self {
        Self::starting_at(SEED)
    }
}

impl UserCounter {
    pub fn starting_at(count: u64) -> Self {
        Self { count }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Runs one timer tick. Returns the new count when it changed.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<u64> {
        if rng.gen::<f64>() <= BUMP_THRESHOLD {
            return None;
        }
        let increase = rng.gen_range(1..=3);
        self.count = self.count.saturating_add(increase);
        Some(self.count)
    }
}

/// Turns the highlight on now and off again after `FLASH_MS`.
pub fn flash<S: Scheduler>(scheduler: &S, highlight: Rc<dyn Fn(bool)>) {
    highlight(true);
    scheduler.schedule(FLASH_MS, Box::new(move || highlight(false)));
}
