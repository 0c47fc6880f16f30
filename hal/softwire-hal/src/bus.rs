//! Bus capability set
//!
//! [`BusPins`] is everything the engine may do to the hardware. One value
//! of an implementing type backs exactly one physical bus.

use crate::delay::TickDelay;
use crate::gpio::{FlexPin, OutputPin};

/// Direction of the SDA pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Released to the target, level is sampled
    Input,
    /// Driven by the master
    Output,
}

/// Pin control and delay capabilities of one bus
///
/// SCL is output-only. SDA switches direction when the target has to
/// drive the line (acknowledge and read phases).
pub trait BusPins {
    /// Drive SDA to `high`
    fn set_sda(&mut self, high: bool);

    /// Drive SCL to `high`
    fn set_scl(&mut self, high: bool);

    /// Sample the SDA level
    fn read_sda(&mut self) -> bool;

    /// Reconfigure the SDA pin direction
    fn set_sda_direction(&mut self, direction: Direction);

    /// Busy-wait for `ticks` backend-defined ticks
    fn delay(&mut self, ticks: u32);
}

impl<T: BusPins + ?Sized> BusPins for &mut T {
    fn set_sda(&mut self, high: bool) {
        (**self).set_sda(high)
    }

    fn set_scl(&mut self, high: bool) {
        (**self).set_scl(high)
    }

    fn read_sda(&mut self) -> bool {
        (**self).read_sda()
    }

    fn set_sda_direction(&mut self, direction: Direction) {
        (**self).set_sda_direction(direction)
    }

    fn delay(&mut self, ticks: u32) {
        (**self).delay(ticks)
    }
}

/// Bus assembled from separate GPIO pins and a delay
///
/// Used by chip crates whose SDA pin can switch direction (see
/// [`FlexPin`]), mirroring a push-pull wiring with external pull-ups.
pub struct GpioPins<SCL, SDA, D> {
    scl: SCL,
    sda: SDA,
    delay: D,
}

impl<SCL, SDA, D> GpioPins<SCL, SDA, D>
where
    SCL: OutputPin,
    SDA: FlexPin,
    D: TickDelay,
{
    /// Create a bus from its pins
    ///
    /// The pins are left untouched; idling the bus is the engine's `init`.
    pub fn new(scl: SCL, sda: SDA, delay: D) -> Self {
        Self { scl, sda, delay }
    }

    /// Give the pins back
    pub fn release(self) -> (SCL, SDA, D) {
        (self.scl, self.sda, self.delay)
    }
}

impl<SCL, SDA, D> BusPins for GpioPins<SCL, SDA, D>
where
    SCL: OutputPin,
    SDA: FlexPin,
    D: TickDelay,
{
    fn set_sda(&mut self, high: bool) {
        self.sda.set_state(high);
    }

    fn set_scl(&mut self, high: bool) {
        self.scl.set_state(high);
    }

    fn read_sda(&mut self) -> bool {
        self.sda.is_high()
    }

    fn set_sda_direction(&mut self, direction: Direction) {
        match direction {
            Direction::Input => self.sda.set_as_input(),
            Direction::Output => self.sda.set_as_output(),
        }
    }

    fn delay(&mut self, ticks: u32) {
        self.delay.delay_ticks(ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::InputPin;

    /// Mock pin tracking latch and direction
    struct MockPin {
        high: bool,
        input: bool,
        external: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                input: false,
                external: true,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> bool {
            if self.input {
                self.external
            } else {
                self.high
            }
        }
    }

    impl FlexPin for MockPin {
        fn set_as_input(&mut self) {
            self.input = true;
        }

        fn set_as_output(&mut self) {
            self.input = false;
        }
    }

    struct CountingDelay {
        total: u32,
    }

    impl TickDelay for CountingDelay {
        fn delay_ticks(&mut self, ticks: u32) {
            self.total += ticks;
        }
    }

    #[test]
    fn test_levels_reach_pins() {
        let mut bus = GpioPins::new(MockPin::new(), MockPin::new(), CountingDelay { total: 0 });

        bus.set_scl(true);
        bus.set_sda(true);
        assert!(bus.read_sda());

        bus.set_sda(false);
        assert!(!bus.read_sda());

        let (scl, sda, _) = bus.release();
        assert!(scl.high);
        assert!(!sda.high);
    }

    #[test]
    fn test_direction_switch() {
        let mut bus = GpioPins::new(MockPin::new(), MockPin::new(), CountingDelay { total: 0 });

        bus.set_sda(false);
        bus.set_sda_direction(Direction::Input);
        // Line released, pull-up wins
        assert!(bus.read_sda());

        bus.set_sda_direction(Direction::Output);
        assert!(!bus.read_sda());
    }

    #[test]
    fn test_delay_passthrough() {
        let mut bus = GpioPins::new(MockPin::new(), MockPin::new(), CountingDelay { total: 0 });
        bus.delay(5);
        bus.delay(7);

        let (_, _, delay) = bus.release();
        assert_eq!(delay.total, 12);
    }
}
