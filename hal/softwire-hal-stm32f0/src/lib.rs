//! STM32F0 backend for the Softwire engine
//!
//! Wraps embassy-stm32 GPIO and embassy-time's blocking delay in the
//! `softwire-hal` traits. It supports various STM32F0 chips including:
//!
//! - STM32F042F6
//! - STM32F042K6
//!
//! # Features
//!
//! - `stm32f042f6` - Enable support for STM32F042F6P6
//! - `stm32f042k6` - Enable support for STM32F042K6T6
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! ```ignore
//! let scl = Output::new(p.PB6, Level::High, Speed::High);
//! let sda = Flex::new(p.PB7);
//! let pins = softwire_hal_stm32f0::bus_pins(scl, sda);
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

pub use delay::BusyDelay;
pub use gpio::{parse_pin_string, PinName, SclPin, SdaPin};

use embassy_stm32::gpio::{Flex, Output};
use softwire_hal::bus::GpioPins;

/// Bus pins of one software I2C bus on an STM32F0
pub type Stm32Pins<'d> = GpioPins<SclPin<'d>, SdaPin<'d>, BusyDelay>;

/// Assemble a bus from a push-pull SCL output and a flexible SDA pin
///
/// One delay tick is one microsecond.
pub fn bus_pins<'d>(scl: Output<'d>, sda: Flex<'d>) -> Stm32Pins<'d> {
    GpioPins::new(SclPin::new(scl), SdaPin::new(sda), BusyDelay::new())
}
