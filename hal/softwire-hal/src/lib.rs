//! Softwire Hardware Abstraction Layer
//!
//! This crate defines the capabilities the bit-banged I2C engine needs from
//! a board: driving and sampling two GPIO lines, switching the direction of
//! the data line, and busy-waiting. Chip-specific crates implement them so the
//! same engine can drive any number of buses on any MCU.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (softwire-drivers, etc.)       │
//! └─────────────────────────────────────────┘
//!                     │ RegisterAccess
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  softwire-core (bit-banged engine)      │
//! └─────────────────────────────────────────┘
//!                     │ BusPins
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  softwire-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ EhPins        │       │ softwire-hal- │
//! │ (embedded-hal)│       │   stm32f0     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bus::BusPins`] - The capability set one bus is driven through
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`delay::TickDelay`] - Busy-wait delay in opaque ticks
//! - [`i2c::RegisterAccess`] - Register read/write used by device drivers

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod delay;
pub mod embedded;
pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use bus::{BusPins, Direction};
pub use delay::TickDelay;
pub use embedded::EhPins;
pub use gpio::{InputPin, OutputPin};
pub use i2c::{RegisterAccess, RegisterAddress};
