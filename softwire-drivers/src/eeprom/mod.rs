//! Serial EEPROM drivers

pub mod at24;

pub use at24::{AddressWidth, At24, At24Config, EepromError};
