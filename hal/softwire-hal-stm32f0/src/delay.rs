//! Blocking microsecond delay

use embassy_time::Delay;
use embedded_hal::delay::DelayNs;
use softwire_hal::TickDelay;

/// Busy-wait delay on the embassy time driver, one tick per microsecond
pub struct BusyDelay {
    delay: Delay,
}

impl Default for BusyDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyDelay {
    /// Create a delay
    pub fn new() -> Self {
        Self { delay: Delay }
    }
}

impl TickDelay for BusyDelay {
    fn delay_ticks(&mut self, ticks: u32) {
        self.delay.delay_us(ticks);
    }
}
