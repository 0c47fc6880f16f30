//! Error types

use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};

/// Outcome of a failed bus operation
///
/// The bit-banged bus cannot tell an absent device from a stuck line or a
/// corrupted bit: every one of them shows up as a missing acknowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// The target did not pull SDA low within the poll budget
    AckTimeout,
}

impl embedded_hal::i2c::Error for BusError {
    fn kind(&self) -> ErrorKind {
        match self {
            BusError::AckTimeout => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown),
        }
    }
}

/// Invalid bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Name longer than [`crate::config::MAX_NAME_LEN`]
    NameTooLong,
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::Error;

    #[test]
    fn test_timeout_maps_to_nack() {
        assert_eq!(
            BusError::AckTimeout.kind(),
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown)
        );
    }
}
