//! Board-agnostic bit-banged I2C master
//!
//! This crate drives an I2C bus from two GPIO lines. It owns no hardware:
//! every bus is a [`BusHandle`] wrapping the board's [`softwire_hal::BusPins`]
//! capabilities and a [`BusConfig`], so one engine serves any number of
//! buses.
//!
//! - Signal and byte primitives (START, STOP, ACK/NACK, clocked bytes)
//! - Message transfers with repeated START
//! - Register read/write helpers for 8- and 16-bit register addresses
//! - An owned, fixed-capacity registry for looking buses up by name
//! - An `embedded_hal::i2c::I2c` implementation
//!
//! All operations are synchronous and blocking. The only failure is a
//! missing acknowledge ([`BusError::AckTimeout`]), after which the bus has
//! been returned to idle.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod embedded;
pub mod engine;
pub mod error;
pub mod message;
pub mod registry;

#[cfg(test)]
pub(crate) mod sim;

pub use config::BusConfig;
pub use engine::BusHandle;
pub use error::{BusError, ConfigError};
pub use message::{Message, Payload};
pub use registry::{Registry, RegistryError};
