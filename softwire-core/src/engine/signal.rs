//! Bus conditions
//!
//! Every line transition is separated by one half-period delay; that delay
//! is what sets the bus clock.

use softwire_hal::{BusPins, Direction};

use super::BusHandle;

impl<P: BusPins> BusHandle<P> {
    /// Generate a START condition
    ///
    /// Expects an idle bus. SDA falls while SCL is high, then SCL is pulled
    /// low ready for the first data bit.
    pub fn start(&mut self) {
        self.pins.set_scl(true);
        self.pins.set_sda(true);
        self.half_period();
        self.pins.set_sda(false);
        self.half_period();
        self.pins.set_scl(false);
    }

    /// Generate a repeated START condition
    ///
    /// Same signal as [`start`](Self::start), but SDA is raised before SCL
    /// so that coming from a clocked state it cannot be mistaken for a STOP.
    pub fn restart(&mut self) {
        self.pins.set_sda(true);
        self.pins.set_scl(true);
        self.half_period();
        self.pins.set_sda(false);
        self.half_period();
        self.pins.set_scl(false);
    }

    /// Generate a STOP condition, leaving both lines high
    pub fn stop(&mut self) {
        self.pins.set_scl(false);
        self.pins.set_sda(false);
        self.half_period();
        self.pins.set_scl(true);
        self.half_period();
        self.pins.set_sda(true);
        self.half_period();
    }

    /// Acknowledge a received byte: one clock with SDA held low
    pub fn ack(&mut self) {
        self.pins.set_scl(false);
        self.pins.set_sda_direction(Direction::Output);
        self.pins.set_sda(false);
        self.half_period();
        self.pins.set_scl(true);
        self.half_period();
        self.pins.set_scl(false);
    }

    /// Refuse further data: one clock with SDA held high
    pub fn nack(&mut self) {
        self.pins.set_scl(false);
        self.pins.set_sda_direction(Direction::Output);
        self.pins.set_sda(true);
        self.half_period();
        self.pins.set_scl(true);
        self.half_period();
        self.pins.set_scl(false);
    }
}
