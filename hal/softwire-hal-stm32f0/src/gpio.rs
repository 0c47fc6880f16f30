//! GPIO pins for STM32F0
//!
//! SCL is a plain push-pull output. SDA is a `Flex` pin that switches
//! between a driven output and a pulled-up input.

use embassy_stm32::gpio::{Flex, Output, Pull, Speed};
use softwire_hal::gpio::{FlexPin, InputPin, OutputPin};

/// Clock line
pub struct SclPin<'d> {
    pin: Output<'d>,
}

impl<'d> SclPin<'d> {
    /// Wrap an output pin
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }

    /// Give the pin back
    pub fn release(self) -> Output<'d> {
        self.pin
    }
}

impl OutputPin for SclPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

/// Data line
pub struct SdaPin<'d> {
    pin: Flex<'d>,
}

impl<'d> SdaPin<'d> {
    /// Wrap a flexible pin, latching high and driving it
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_high();
        pin.set_as_output(Speed::High);
        Self { pin }
    }

    /// Give the pin back
    pub fn release(self) -> Flex<'d> {
        self.pin
    }
}

impl OutputPin for SdaPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

impl InputPin for SdaPin<'_> {
    fn is_high(&mut self) -> bool {
        self.pin.is_high()
    }
}

impl FlexPin for SdaPin<'_> {
    fn set_as_input(&mut self) {
        // Internal pull-up keeps the line defined on boards without external ones
        self.pin.set_as_input(Pull::Up);
    }

    fn set_as_output(&mut self) {
        self.pin.set_as_output(Speed::High);
    }
}

/// GPIO named by port letter and pin number, e.g. `PB6`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinName {
    /// Port letter, `A`–`F`
    pub port: char,
    /// Pin number within the port, 0–15
    pub pin: u8,
}

/// Parse a pin name from board configuration
///
/// Accepts `"PA0"` through `"PF15"`, surrounding whitespace allowed.
pub fn parse_pin_string(s: &str) -> Option<PinName> {
    let s = s.trim();
    let rest = s.strip_prefix('P')?;

    let mut chars = rest.chars();
    let port = chars.next()?;
    if !('A'..='F').contains(&port) {
        return None;
    }

    let pin_str = chars.as_str();
    if pin_str.is_empty() || pin_str.len() > 2 || !pin_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let pin: u8 = pin_str.parse().ok()?;
    if pin > 15 {
        return None;
    }

    Some(PinName { port, pin })
}
