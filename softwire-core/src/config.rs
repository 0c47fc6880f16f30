//! Bus configuration
//!
//! Per-bus timing and identity. The engine reads this on every call and
//! never modifies it.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum length of a bus name
pub const MAX_NAME_LEN: usize = 16;

/// Default number of SDA samples taken while waiting for an acknowledge
pub const DEFAULT_ACK_POLL_BUDGET: u32 = 4096;

/// Configuration of one bit-banged bus
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BusConfig {
    /// Ticks passed to the delay capability between line transitions
    ///
    /// Sets the effective clock rate. Keeping it within the attached
    /// devices' timing limits is the caller's job.
    pub half_period: u32,
    /// SDA samples taken before an acknowledge wait gives up
    pub ack_poll_budget: u32,
    /// Name used for registry lookup
    pub name: Option<String<MAX_NAME_LEN>>,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl BusConfig {
    /// ~100 kHz with a 1 µs tick
    pub const STANDARD: Self = Self::new(5);

    /// ~400 kHz with a 1 µs tick (rounded down to one tick)
    pub const FAST: Self = Self::new(1);

    /// Create an unnamed config with the given half-period
    pub const fn new(half_period: u32) -> Self {
        Self {
            half_period,
            ack_poll_budget: DEFAULT_ACK_POLL_BUDGET,
            name: None,
        }
    }

    /// Config for a target SCL frequency, assuming a 1 µs tick
    ///
    /// Frequencies above 500 kHz clamp to a one-tick half-period.
    pub fn from_frequency(frequency_hz: u32) -> Self {
        let half_period = 500_000 / frequency_hz.max(1);
        Self::new(half_period.max(1))
    }

    /// Set the acknowledge poll budget
    pub const fn with_ack_poll_budget(mut self, samples: u32) -> Self {
        self.ack_poll_budget = samples;
        self
    }

    /// Set the registry name
    pub fn with_name(mut self, name: &str) -> Result<Self, ConfigError> {
        let name = String::try_from(name).map_err(|_| ConfigError::NameTooLong)?;
        self.name = Some(name);
        Ok(self)
    }

    /// Registry name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BusConfig::default();
        assert_eq!(config.half_period, 5);
        assert_eq!(config.ack_poll_budget, DEFAULT_ACK_POLL_BUDGET);
        assert!(config.name().is_none());
    }

    #[test]
    fn test_from_frequency() {
        assert_eq!(BusConfig::from_frequency(100_000).half_period, 5);
        assert_eq!(BusConfig::from_frequency(10_000).half_period, 50);

        // Too fast for a 1 µs tick
        assert_eq!(BusConfig::from_frequency(1_000_000).half_period, 1);
        // Zero does not divide by zero
        assert_eq!(BusConfig::from_frequency(0).half_period, 500_000);
    }

    #[test]
    fn test_named_config() {
        let config = BusConfig::new(40).with_name("i2c0").unwrap();
        assert_eq!(config.name(), Some("i2c0"));
        assert_eq!(config.half_period, 40);

        let too_long = BusConfig::new(40).with_name("a-very-long-bus-name");
        assert_eq!(too_long, Err(ConfigError::NameTooLong));
    }

    #[test]
    fn test_poll_budget() {
        let config = BusConfig::FAST.with_ack_poll_budget(16);
        assert_eq!(config.ack_poll_budget, 16);
        assert_eq!(config.half_period, 1);
    }
}
