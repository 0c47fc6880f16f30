//! Bit-banged I2C engine
//!
//! [`BusHandle`] pairs a board's [`BusPins`] with a [`BusConfig`]. Every
//! protocol operation is a `&mut self` method, so one bus is driven by one
//! call stack from START to STOP and the borrow checker rules out
//! interleaved transfers on the same lines.
//!
//! The operations are layered:
//!
//! - [`signal`]: START, repeated START, STOP, ACK, NACK
//! - [`byte`]: clocked byte send/receive and acknowledge detection
//! - [`transfer`]: multi-message transactions
//! - [`register`]: addressed register reads and writes

pub mod byte;
pub mod register;
pub mod signal;
pub mod transfer;

use softwire_hal::BusPins;

use crate::config::BusConfig;

/// One logical I2C bus
pub struct BusHandle<P> {
    pins: P,
    config: BusConfig,
}

impl<P> BusHandle<P> {
    /// Create a handle; the lines are not touched until [`init`](Self::init)
    pub fn new(pins: P, config: BusConfig) -> Self {
        Self { pins, config }
    }

    /// Bus configuration
    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    /// Registry name, if any
    pub fn name(&self) -> Option<&str> {
        self.config.name()
    }

    /// Direct access to the pins for custom sequences
    pub fn pins_mut(&mut self) -> &mut P {
        &mut self.pins
    }

    /// Tear the handle down
    pub fn release(self) -> (P, BusConfig) {
        (self.pins, self.config)
    }
}

impl<P: BusPins> BusHandle<P> {
    /// Release both lines so the bus idles high
    pub fn init(&mut self) {
        self.pins.set_sda(true);
        self.pins.set_scl(true);
    }

    /// Wait one half clock period
    fn half_period(&mut self) {
        self.pins.delay(self.config.half_period);
    }
}
