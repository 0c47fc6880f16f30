//! embedded-hal 1.0 adapter
//!
//! Most HALs hand out open-drain pins implementing both
//! `embedded_hal::digital::OutputPin` and `InputPin`. With an open-drain SDA
//! there is no direction register to flip: "input" means writing a 1 so the
//! target can pull the line low, and "output" means driving the latched level
//! again.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::bus::{BusPins, Direction};

/// Bus built from embedded-hal open-drain pins and a `DelayNs`
///
/// One tick is one microsecond.
pub struct EhPins<SCL, SDA, D> {
    scl: SCL,
    sda: SDA,
    delay: D,
    /// Level the engine last asked SDA to drive
    sda_level: bool,
    /// SDA currently released to the target
    released: bool,
}

impl<SCL, SDA, D> EhPins<SCL, SDA, D>
where
    SCL: OutputPin<Error = Infallible>,
    SDA: OutputPin<Error = Infallible> + InputPin<Error = Infallible>,
    D: DelayNs,
{
    /// Create a bus from open-drain pins
    pub fn new(scl: SCL, sda: SDA, delay: D) -> Self {
        Self {
            scl,
            sda,
            delay,
            sda_level: true,
            released: false,
        }
    }

    /// Give the pins back
    pub fn release(self) -> (SCL, SDA, D) {
        (self.scl, self.sda, self.delay)
    }

    fn drive_sda(&mut self, high: bool) {
        if high {
            unwrap_infallible(self.sda.set_high());
        } else {
            unwrap_infallible(self.sda.set_low());
        }
    }
}

impl<SCL, SDA, D> BusPins for EhPins<SCL, SDA, D>
where
    SCL: OutputPin<Error = Infallible>,
    SDA: OutputPin<Error = Infallible> + InputPin<Error = Infallible>,
    D: DelayNs,
{
    fn set_sda(&mut self, high: bool) {
        self.sda_level = high;
        if !self.released {
            self.drive_sda(high);
        }
    }

    fn set_scl(&mut self, high: bool) {
        if high {
            unwrap_infallible(self.scl.set_high());
        } else {
            unwrap_infallible(self.scl.set_low());
        }
    }

    fn read_sda(&mut self) -> bool {
        unwrap_infallible(self.sda.is_high())
    }

    fn set_sda_direction(&mut self, direction: Direction) {
        match direction {
            Direction::Input => {
                self.released = true;
                self.drive_sda(true);
            }
            Direction::Output => {
                self.released = false;
                self.drive_sda(self.sda_level);
            }
        }
    }

    fn delay(&mut self, ticks: u32) {
        self.delay.delay_us(ticks);
    }
}

fn unwrap_infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
