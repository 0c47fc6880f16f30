//! I2C device drivers
//!
//! Drivers in this crate talk to their device through
//! [`softwire_hal::RegisterAccess`], so they run on a bit-banged
//! `softwire_core::BusHandle` on target and against a mock on the host:
//!
//! - Serial EEPROMs (24Cxx family)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod eeprom;
